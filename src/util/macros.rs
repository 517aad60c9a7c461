#![allow(unused_macros)]
#![allow(unused_imports)]

/// `vars!{ x = 2, y = -1 }` builds a `Variables`.
#[macro_export]
macro_rules! vars {
    {} => {{
        $crate::Variables::new()
    }};
    {$( $name: ident = $exp: expr ),+ $(,)?} => {{
        $crate::Variables::from_iter([$((stringify!($name), ($exp) as isize),)+])
    }};
}

/// `term!(2, x = 3)` builds the monomial `2x³`.
#[macro_export]
macro_rules! term {
    ($m: expr $(, $name: ident = $exp: expr)* $(,)?) => {{
        $crate::Term::new($m, $crate::vars!{ $($name = $exp),* })
    }};
}

// Given `impl Op<&U> for &T`, derives the by-value variants.
macro_rules! forward_ref_binop {
    (impl $imp:ident, $method:ident for $t:ty, $u:ty => $o:ty) => {
        impl $imp<$u> for $t { 
            type Output = $o;
            fn $method(self, rhs: $u) -> $o {
                <&$t as $imp<&$u>>::$method(&self, &rhs)
            }
        }

        impl $imp<&$u> for $t { 
            type Output = $o;
            fn $method(self, rhs: &$u) -> $o {
                <&$t as $imp<&$u>>::$method(&self, rhs)
            }
        }

        impl $imp<$u> for &$t { 
            type Output = $o;
            fn $method(self, rhs: $u) -> $o {
                <&$t as $imp<&$u>>::$method(self, &rhs)
            }
        }
    };
}

// `2 * t` and `n * t`, given `t * 2` and `t * n`.
macro_rules! scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl std::ops::Mul<$t> for i64 { 
            type Output = $t;
            fn mul(self, rhs: $t) -> $t {
                rhs * self
            }
        }

        impl std::ops::Mul<&$t> for i64 { 
            type Output = $t;
            fn mul(self, rhs: &$t) -> $t {
                rhs * self
            }
        }

        impl std::ops::Mul<$t> for num_bigint::BigInt { 
            type Output = $t;
            fn mul(self, rhs: $t) -> $t {
                rhs * self
            }
        }

        impl std::ops::Mul<&$t> for &num_bigint::BigInt { 
            type Output = $t;
            fn mul(self, rhs: &$t) -> $t {
                rhs * self
            }
        }
    )*};
}

pub(crate) use {forward_ref_binop, scalar_lhs_mul};
