use std::borrow::Cow;
use std::cmp::Reverse;
use std::collections::BTreeSet;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use auto_impl_ops::auto_ops;
use itertools::Itertools;
use log::debug;
use num_bigint::BigInt;
use num_traits::{Signed, Zero};

use crate::config;
use crate::error::Result;
use crate::sets::Number;
use crate::util::macros::scalar_lhs_mul;
use super::{Algebraic, LazyProd, Mono, Term};

/// A sum of terms stored as a chain of nodes.
/// 
/// Insertion merges a term into the node holding the same signature,
/// so every signature occurs at most once and two chains compare equal
/// regardless of the order their terms were added in.
pub struct Expression { 
    term: Term,
    rest: Option<Box<Expression>>
}

impl Expression { 
    /// Chains `term` in front of `rest`, merging it into `rest` if a node
    /// with the same signature is already there.
    pub fn new<T>(term: T, rest: Option<Expression>) -> Self
    where T: Into<Term> {
        let mut res = Self::from(term.into());
        if let Some(rest) = rest { 
            res += rest;
        }
        res
    }

    pub fn from_terms<I>(terms: I) -> Option<Self>
    where I: IntoIterator<Item = Term> {
        let mut terms = terms.into_iter();
        let mut res = Self::from(terms.next()?);
        for t in terms { 
            res.insert(t);
        }
        Some(res)
    }

    pub fn term(&self) -> &Term { 
        &self.term
    }

    pub fn rest(&self) -> Option<&Expression> { 
        self.rest.as_deref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Term> { 
        std::iter::successors(Some(self), |e| e.rest()).map(|e| &e.term)
    }

    pub fn nterms(&self) -> usize { 
        self.iter().count()
    }

    pub fn terms(&self) -> Vec<&Term> { 
        self.iter().collect()
    }

    pub fn degree(&self) -> isize { 
        self.iter().map(|t| t.degree()).max().unwrap_or(0)
    }

    /// The chain without its zero-multiplier terms, `None` if nothing is left.
    pub fn remove_null_values(&self) -> Option<Expression> { 
        Self::from_terms(self.iter().filter(|t| !t.is_null()).cloned())
    }

    pub fn is_null(&self) -> bool { 
        self.remove_null_values().is_none()
    }

    pub fn develop(&self) -> Expression { 
        let mut res = Expression::from(self.term.develop());
        for t in self.iter().skip(1) { 
            res += Expression::from(t.develop());
        }
        debug!("developed {} terms into {}, degree {}", self.nterms(), res.nterms(), res.degree());
        res
    }

    /// Compares the expanded forms, ignoring zero terms.
    pub fn equiv(&self, other: &Expression) -> bool { 
        let (a, b) = (self.develop(), other.develop());
        debug!("equiv: {a} <> {b}");
        a.remove_null_values() == b.remove_null_values()
    }

    pub fn variable_names(&self) -> BTreeSet<&str> { 
        self.iter().flat_map(|t| t.variable_names()).collect()
    }

    pub fn is_polynom(&self) -> bool { 
        self.iter().all(|t| t.is_polynom_term())
    }

    pub fn scaled<N>(&self, n: N) -> Result<Expression>
    where N: Into<Number> {
        let n = i64::try_from(n.into())?;
        Ok(self * n)
    }

    fn insert(&mut self, t: Term) { 
        if self.term.same_signature(&t) { 
            return self.term.absorb(&t)
        }

        let mut cursor = &mut self.rest;
        while let Some(node) = cursor { 
            if node.term.same_signature(&t) { 
                return node.term.absorb(&t)
            }
            cursor = &mut node.rest;
        }
        *cursor = Some(Box::new(Self::from(t)));
    }
}

// node by node, chains may be long.
impl Clone for Expression { 
    fn clone(&self) -> Self {
        let mut res = Self::from(self.term.clone());
        let mut cursor = &mut res.rest;
        for t in self.iter().skip(1) { 
            let node = cursor.insert(Box::new(Self::from(t.clone())));
            cursor = &mut node.rest;
        }
        res
    }
}

impl Drop for Expression { 
    fn drop(&mut self) {
        let mut rest = self.rest.take();
        while let Some(mut node) = rest { 
            rest = node.rest.take();
        }
    }
}

impl From<Term> for Expression { 
    fn from(term: Term) -> Self {
        Self { term, rest: None }
    }
}

impl From<Mono> for Expression { 
    fn from(m: Mono) -> Self {
        Self::from(Term::from(m))
    }
}

impl From<Algebraic> for Expression { 
    fn from(a: Algebraic) -> Self {
        match a { 
            Algebraic::Term(t) => Self::from(t),
            Algebraic::Expr(e) => e
        }
    }
}

impl Default for Expression { 
    fn default() -> Self {
        Self::from(Term::zero())
    }
}

impl Zero for Expression { 
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

// compared as sets of terms.
impl PartialEq for Expression { 
    fn eq(&self, other: &Self) -> bool {
        self.nterms() == other.nterms() && 
        self.iter().all(|t| other.iter().any(|u| t == u))
    }
}

#[auto_ops]
impl AddAssign<&Term> for Expression { 
    fn add_assign(&mut self, rhs: &Term) {
        self.insert(rhs.clone())
    }
}

#[auto_ops]
impl AddAssign<&Expression> for Expression { 
    fn add_assign(&mut self, rhs: &Expression) {
        for t in rhs.iter() { 
            self.insert(t.clone())
        }
    }
}

#[auto_ops]
impl SubAssign<&Term> for Expression { 
    fn sub_assign(&mut self, rhs: &Term) {
        self.insert(-rhs)
    }
}

#[auto_ops]
impl SubAssign<&Expression> for Expression { 
    fn sub_assign(&mut self, rhs: &Expression) {
        for t in rhs.iter() { 
            self.insert(-t)
        }
    }
}

// scalars distribute eagerly, in place.
#[auto_ops]
impl MulAssign<&BigInt> for Expression { 
    fn mul_assign(&mut self, rhs: &BigInt) {
        let mut node = Some(self);
        while let Some(e) = node { 
            e.term *= rhs;
            node = e.rest.as_deref_mut();
        }
    }
}

#[auto_ops]
impl MulAssign<&i64> for Expression { 
    fn mul_assign(&mut self, rhs: &i64) {
        *self *= BigInt::from(*rhs)
    }
}

#[auto_ops]
impl MulAssign<&Term> for Expression { 
    fn mul_assign(&mut self, rhs: &Term) {
        let p = LazyProd::of_term_expr(rhs, self);
        *self = Self::from(Term::from(p));
    }
}

#[auto_ops]
impl MulAssign<&Expression> for Expression { 
    fn mul_assign(&mut self, rhs: &Expression) {
        let lhs = std::mem::take(self);
        let p = LazyProd::new(lhs, rhs.clone());
        *self = Self::from(Term::from(p));
    }
}

impl Neg for Expression { 
    type Output = Expression;
    fn neg(self) -> Expression {
        self * -1i64
    }
}

impl Neg for &Expression { 
    type Output = Expression;
    fn neg(self) -> Expression {
        self * -1i64
    }
}

scalar_lhs_mul!(Expression);

impl Display for Expression { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let expr = if config::is_remove_null_values_on_display() { 
            match self.remove_null_values() { 
                Some(e) => Cow::Owned(e),
                None => return write!(f, "0")
            }
        } else { 
            Cow::Borrowed(self)
        };

        // highest degree first, ties keep chain order.
        let mut terms = expr.iter().sorted_by_key(|t| Reverse(t.degree()));
        let Some(head) = terms.next() else { 
            return write!(f, "0")
        };

        write!(f, "{head}")?;

        for t in terms { 
            if t.multiplier().is_negative() { 
                write!(f, " - {}", -t)?
            } else { 
                write!(f, " + {t}")?
            }
        }

        Ok(())
    }
}

impl Debug for Expression { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
