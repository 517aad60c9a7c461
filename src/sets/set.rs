use std::fmt::{Debug, Display};
use std::ops::{BitAnd, BitOr, Not, Sub};
use std::sync::Arc;

use super::{Interval, ListSet, Number};

pub type Predicate = Arc<dyn Fn(&Number) -> bool + Send + Sync>;

/// A membership predicate over numbers.
/// 
/// Combinators never touch their operands: each one builds a new set
/// holding copies of them.
#[derive(Clone)]
pub enum Set { 
    Null,
    Real,
    Relative,
    Natural,
    List(ListSet),
    Interval(Interval),
    Union(Box<Set>, Box<Set>),
    Intersection(Box<Set>, Box<Set>),
    Difference(Box<Set>, Box<Set>),
    Complement(Box<Set>),
    Fn(Predicate),
}

pub const NULL: Set = Set::Null;
pub const REAL: Set = Set::Real;
pub const RELATIVE: Set = Set::Relative;
pub const NATURAL: Set = Set::Natural;

impl Set { 
    pub fn from_fn<F>(f: F) -> Self
    where F: Fn(&Number) -> bool + Send + Sync + 'static {
        Set::Fn(Arc::new(f))
    }

    pub fn contains<N>(&self, n: N) -> bool
    where N: Into<Number> {
        self.contains_number(&n.into())
    }

    fn contains_number(&self, n: &Number) -> bool { 
        match self { 
            Set::Null      => false,
            Set::Real      => true,
            Set::Relative  => n.is_int(),
            Set::Natural   => matches!(n, Number::Int(i) if *i >= 0),
            Set::List(l)     => l.contains(*n),
            Set::Interval(i) => i.contains(*n),
            Set::Union(a, b)        => a.contains_number(n) || b.contains_number(n),
            Set::Intersection(a, b) => a.contains_number(n) && b.contains_number(n),
            Set::Difference(a, b)   => a.contains_number(n) && !b.contains_number(n),
            Set::Complement(a)      => !a.contains_number(n),
            Set::Fn(p) => (**p)(n),
        }
    }

    pub fn union<S>(&self, other: S) -> Set
    where S: Into<Set> {
        Set::Union(Box::new(self.clone()), Box::new(other.into()))
    }

    pub fn intersection<S>(&self, other: S) -> Set
    where S: Into<Set> {
        Set::Intersection(Box::new(self.clone()), Box::new(other.into()))
    }

    pub fn difference<S>(&self, other: S) -> Set
    where S: Into<Set> {
        Set::Difference(Box::new(self.clone()), Box::new(other.into()))
    }

    pub fn complement(&self) -> Set { 
        Set::Complement(Box::new(self.clone()))
    }
}

impl From<Interval> for Set { 
    fn from(i: Interval) -> Self {
        Set::Interval(i)
    }
}

impl From<ListSet> for Set { 
    fn from(l: ListSet) -> Self {
        Set::List(l)
    }
}

impl From<&Set> for Set { 
    fn from(s: &Set) -> Self {
        s.clone()
    }
}

macro_rules! impl_set_ops {
    ($t:ty) => {
        impl<S> BitOr<S> for $t where S: Into<Set> {
            type Output = Set;
            fn bitor(self, rhs: S) -> Set {
                Set::from(self).union(rhs)
            }
        }

        impl<S> BitAnd<S> for $t where S: Into<Set> {
            type Output = Set;
            fn bitand(self, rhs: S) -> Set {
                Set::from(self).intersection(rhs)
            }
        }

        impl<S> Sub<S> for $t where S: Into<Set> {
            type Output = Set;
            fn sub(self, rhs: S) -> Set {
                Set::from(self).difference(rhs)
            }
        }

        impl Not for $t {
            type Output = Set;
            fn not(self) -> Set {
                Set::from(self).complement()
            }
        }
    };
}

impl_set_ops!(Set);
impl_set_ops!(&Set);
impl_set_ops!(Interval);
impl_set_ops!(ListSet);

impl Display for Set { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self { 
            Set::Null      => write!(f, "∅"),
            Set::Real      => write!(f, "ℝ"),
            Set::Relative  => write!(f, "ℤ"),
            Set::Natural   => write!(f, "ℕ"),
            Set::List(l)     => write!(f, "{l}"),
            Set::Interval(i) => write!(f, "{i}"),
            Set::Union(a, b)        => write!(f, "({a} ∪ {b})"),
            Set::Intersection(a, b) => write!(f, "({a} ∩ {b})"),
            Set::Difference(a, b)   => write!(f, "({a} ∖ {b})"),
            Set::Complement(a)      => write!(f, "∁{a}"),
            Set::Fn(_) => write!(f, "{{x | p(x)}}"),
        }
    }
}

impl Debug for Set { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn primitives() { 
        assert!(!NULL.contains(0));
        assert!(REAL.contains(0.5));
        assert!(REAL.contains(-3));
        assert!(RELATIVE.contains(-3));
        assert!(!RELATIVE.contains(3.0));
        assert!(NATURAL.contains(0));
        assert!(NATURAL.contains(7));
        assert!(!NATURAL.contains(-1));
        assert!(!NATURAL.contains(2.0));
    }

    #[test]
    fn union() { 
        let s = ListSet::from_iter([-1]) | NATURAL;
        assert!(s.contains(-1));
        assert!(s.contains(3));
        assert!(!s.contains(-2));
    }

    #[test]
    fn intersection() { 
        let i = Interval::closed(-5, 5).unwrap();
        let s = i & RELATIVE;
        assert!(s.contains(-5));
        assert!(!s.contains(0.5));
        assert!(!s.contains(6));
    }

    #[test]
    fn difference() { 
        let s = RELATIVE - NATURAL;
        assert!(s.contains(-1));
        assert!(!s.contains(0));
        assert!(!s.contains(-0.5));
    }

    #[test]
    fn complement() { 
        let s = !NATURAL;
        assert!(s.contains(-1));
        assert!(s.contains(0.5));
        assert!(!s.contains(1));
    }

    #[test]
    fn operands_untouched() { 
        let a = Set::from(Interval::closed(0, 1).unwrap());
        let b = ListSet::from_iter([2]);
        let u = &a | b.clone();
        let n = !&a;

        assert!(u.contains(2));
        assert!(n.contains(2));
        assert!(!a.contains(2));
        assert!(a.contains(1));
        assert!(b.contains(2));
    }

    #[test]
    fn from_fn() { 
        let even = Set::from_fn(|n| matches!(n, Number::Int(i) if i % 2 == 0));
        let s = &even & NATURAL;
        assert!(s.contains(4));
        assert!(!s.contains(-4));
        assert!(!s.contains(3));
    }

    #[test]
    fn display() { 
        let s = (NATURAL | ListSet::from_iter([-1])) - Interval::open(2, 3).unwrap();
        assert_eq!(s.to_string(), "((ℕ ∪ {-1}) ∖ ]2;3[)");
        assert_eq!((!REAL).to_string(), "∁ℝ");
        assert_eq!(NULL.to_string(), "∅");
    }
}
