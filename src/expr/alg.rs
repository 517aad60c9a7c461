use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use auto_impl_ops::auto_ops;
use num_bigint::BigInt;

use crate::error::Result;
use crate::sets::Number;
use crate::util::macros::scalar_lhs_mul;
use super::{Expression, Term};

/// Either a single term or a sum chain.
/// 
/// Adding two terms yields a term when they merge and a chain otherwise;
/// the in-place operators rebind `self` accordingly.
#[derive(Clone)]
pub enum Algebraic { 
    Term(Term),
    Expr(Expression)
}

impl Algebraic { 
    pub fn as_term(&self) -> Option<&Term> { 
        match self { 
            Algebraic::Term(t) => Some(t),
            Algebraic::Expr(_) => None
        }
    }

    pub fn as_expr(&self) -> Cow<'_, Expression> { 
        match self { 
            Algebraic::Term(t) => Cow::Owned(Expression::from(t.clone())),
            Algebraic::Expr(e) => Cow::Borrowed(e)
        }
    }

    pub fn into_expr(self) -> Expression { 
        Expression::from(self)
    }

    pub fn degree(&self) -> isize { 
        match self { 
            Algebraic::Term(t) => t.degree(),
            Algebraic::Expr(e) => e.degree()
        }
    }

    pub fn is_null(&self) -> bool { 
        match self { 
            Algebraic::Term(t) => t.is_null(),
            Algebraic::Expr(e) => e.is_null()
        }
    }

    pub fn develop(&self) -> Algebraic { 
        match self { 
            Algebraic::Term(t) => t.develop(),
            Algebraic::Expr(e) => Algebraic::Expr(e.develop())
        }
    }

    pub fn variable_names(&self) -> BTreeSet<&str> { 
        match self { 
            Algebraic::Term(t) => t.variable_names(),
            Algebraic::Expr(e) => e.variable_names()
        }
    }

    pub fn is_polynom(&self) -> bool { 
        match self { 
            Algebraic::Term(t) => t.is_polynom_term(),
            Algebraic::Expr(e) => e.is_polynom()
        }
    }

    pub fn scaled<N>(&self, n: N) -> Result<Algebraic>
    where N: Into<Number> {
        let n = i64::try_from(n.into())?;
        Ok(self * n)
    }
}

impl From<Term> for Algebraic { 
    fn from(t: Term) -> Self {
        Algebraic::Term(t)
    }
}

impl From<Expression> for Algebraic { 
    fn from(e: Expression) -> Self {
        Algebraic::Expr(e)
    }
}

impl Default for Algebraic { 
    fn default() -> Self {
        Algebraic::Term(Term::zero())
    }
}

// a term equals the one-node chain holding it.
impl PartialEq for Algebraic { 
    fn eq(&self, other: &Self) -> bool {
        match (self, other) { 
            (Algebraic::Term(a), Algebraic::Term(b)) => a == b,
            _ => self.as_expr() == other.as_expr()
        }
    }
}

#[auto_ops]
impl AddAssign<&Algebraic> for Algebraic { 
    fn add_assign(&mut self, rhs: &Algebraic) {
        let lhs = std::mem::take(self);
        *self = match (lhs, rhs) { 
            (Algebraic::Term(a), Algebraic::Term(b)) => &a + b,
            (Algebraic::Term(a), Algebraic::Expr(b)) => Algebraic::Expr(&a + b),
            (Algebraic::Expr(a), Algebraic::Term(b)) => Algebraic::Expr(a + b),
            (Algebraic::Expr(a), Algebraic::Expr(b)) => Algebraic::Expr(a + b),
        }
    }
}

#[auto_ops]
impl SubAssign<&Algebraic> for Algebraic { 
    fn sub_assign(&mut self, rhs: &Algebraic) {
        *self += -rhs
    }
}

#[auto_ops]
impl MulAssign<&BigInt> for Algebraic { 
    fn mul_assign(&mut self, rhs: &BigInt) {
        match self { 
            Algebraic::Term(t) => *t *= rhs,
            Algebraic::Expr(e) => *e *= rhs
        }
    }
}

#[auto_ops]
impl MulAssign<&i64> for Algebraic { 
    fn mul_assign(&mut self, rhs: &i64) {
        *self *= BigInt::from(*rhs)
    }
}

// deferred, see `LazyProd`.
#[auto_ops]
impl MulAssign<&Algebraic> for Algebraic { 
    fn mul_assign(&mut self, rhs: &Algebraic) {
        let lhs = std::mem::take(self);
        *self = Algebraic::Expr(match (lhs, rhs) { 
            (Algebraic::Term(a), Algebraic::Term(b)) => &a * b,
            (Algebraic::Term(a), Algebraic::Expr(b)) => &a * b,
            (Algebraic::Expr(a), Algebraic::Term(b)) => a * b,
            (Algebraic::Expr(a), Algebraic::Expr(b)) => a * b,
        })
    }
}

impl Neg for Algebraic { 
    type Output = Algebraic;
    fn neg(self) -> Algebraic {
        self * -1i64
    }
}

impl Neg for &Algebraic { 
    type Output = Algebraic;
    fn neg(self) -> Algebraic {
        self * -1i64
    }
}

scalar_lhs_mul!(Algebraic);

impl Display for Algebraic { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self { 
            Algebraic::Term(t) => Display::fmt(t, f),
            Algebraic::Expr(e) => Display::fmt(e, f)
        }
    }
}

impl Debug for Algebraic { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term;

    #[test]
    fn add_assign_rebinds() { 
        let mut a = Algebraic::from(term!(1, x = 1));
        a += Algebraic::from(term!(2, x = 1));
        assert_eq!(a.as_term(), Some(&term!(3, x = 1)));

        a += Algebraic::from(term!(1));
        assert!(a.as_term().is_none());
        assert_eq!(a.to_string(), "3x + 1");
    }

    #[test]
    fn sub_to_null() { 
        let a = Algebraic::from(Expression::from(term!(1, x = 1)) + term!(2));
        assert!((&a - &a).is_null());
    }

    #[test]
    fn term_eq_single_chain() { 
        let t = term!(2, y = 1);
        assert_eq!(Algebraic::from(t.clone()), Algebraic::from(Expression::from(t)));
    }

    #[test]
    fn mul_then_develop() { 
        let a = Algebraic::from(term!(2, x = 3));
        let b = Algebraic::from(term!(5, x = 2));
        let c = &a * &b;

        assert_eq!(c.degree(), 5);
        assert_eq!(c.develop(), Algebraic::from(term!(10, x = 5)));
    }

    #[test]
    fn scalar_on_left() { 
        let a = Algebraic::from(term!(2, x = 3));
        assert_eq!(-1 * &a, -&a);
        assert_eq!(2 * a, Algebraic::from(term!(4, x = 3)));
    }

    #[test]
    fn scaled() { 
        let a = Algebraic::from(term!(2, x = 3));
        assert_eq!(a.scaled(-1), Ok(-&a));
        assert!(a.scaled(0.5).is_err());
    }
}
