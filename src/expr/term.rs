use std::collections::BTreeSet;
use std::fmt::{Debug, Display};
use std::ops::{Add, Mul, MulAssign, Neg, Sub};

use auto_impl_ops::auto_ops;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use crate::error::Result;
use crate::sets::{Number, NATURAL};
use crate::util::macros::{forward_ref_binop, scalar_lhs_mul};
use super::{Algebraic, Expression, LazyProd, Variables};

/// A monomial `multiplier · Π x^e`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mono { 
    multiplier: BigInt,
    vars: Variables
}

impl Mono { 
    pub fn new<N, V>(multiplier: N, vars: V) -> Self
    where N: Into<BigInt>, V: Into<Variables> {
        Self { multiplier: multiplier.into(), vars: vars.into() }
    }

    pub fn constant<N>(multiplier: N) -> Self
    where N: Into<BigInt> {
        Self::new(multiplier, Variables::new())
    }

    pub fn multiplier(&self) -> &BigInt { 
        &self.multiplier
    }

    pub fn vars(&self) -> &Variables { 
        &self.vars
    }

    pub fn degree(&self) -> isize { 
        self.vars.degree()
    }

    pub fn is_null(&self) -> bool { 
        self.multiplier.is_zero()
    }

    /// Natural degree in at most one variable.
    pub fn is_polynom_term(&self) -> bool { 
        NATURAL.contains(self.degree()) && self.vars.nonzero_len() <= 1
    }

    pub(crate) fn add_multiplier(&mut self, m: &BigInt) { 
        self.multiplier += m
    }
}

#[auto_ops]
impl MulAssign<&BigInt> for Mono { 
    fn mul_assign(&mut self, rhs: &BigInt) {
        self.multiplier *= rhs
    }
}

#[auto_ops]
impl MulAssign<&i64> for Mono { 
    fn mul_assign(&mut self, rhs: &i64) {
        self.multiplier *= *rhs
    }
}

// eager: multipliers multiply, exponents add.
#[auto_ops]
impl MulAssign<&Mono> for Mono { 
    fn mul_assign(&mut self, rhs: &Mono) {
        self.multiplier *= &rhs.multiplier;
        self.vars += &rhs.vars;
    }
}

impl Neg for &Mono { 
    type Output = Mono;
    fn neg(self) -> Mono {
        Mono::new(-&self.multiplier, self.vars.clone())
    }
}

impl Display for Mono { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // a unit multiplier is implied on any non-constant monomial,
        // negative degrees included: `x⁻²`, not `1x⁻²`.
        if !self.multiplier.is_one() || self.degree() == 0 { 
            write!(f, "{}", self.multiplier)?;
        }
        write!(f, "{}", self.vars)
    }
}

impl Debug for Mono { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// A term of a sum chain: either a monomial or an unexpanded product.
#[derive(Clone)]
pub enum Term { 
    Mono(Mono),
    Prod(Box<LazyProd>)
}

impl Term { 
    pub fn new<N, V>(multiplier: N, vars: V) -> Self
    where N: Into<BigInt>, V: Into<Variables> {
        Term::Mono(Mono::new(multiplier, vars))
    }

    pub fn constant<N>(multiplier: N) -> Self
    where N: Into<BigInt> {
        Term::Mono(Mono::constant(multiplier))
    }

    pub fn zero() -> Self { 
        Self::constant(0)
    }

    pub fn as_mono(&self) -> Option<&Mono> { 
        match self { 
            Term::Mono(m) => Some(m),
            Term::Prod(_) => None
        }
    }

    pub fn as_prod(&self) -> Option<&LazyProd> { 
        match self { 
            Term::Mono(_) => None,
            Term::Prod(p) => Some(p)
        }
    }

    pub fn multiplier(&self) -> &BigInt { 
        match self { 
            Term::Mono(m) => m.multiplier(),
            Term::Prod(p) => p.multiplier()
        }
    }

    pub fn degree(&self) -> isize { 
        match self { 
            Term::Mono(m) => m.degree(),
            Term::Prod(p) => p.degree()
        }
    }

    pub fn is_null(&self) -> bool { 
        match self { 
            Term::Mono(m) => m.is_null(),
            Term::Prod(p) => p.is_null()
        }
    }

    pub fn is_polynom_term(&self) -> bool { 
        match self { 
            Term::Mono(m) => m.is_polynom_term(),
            Term::Prod(p) => p.is_polynom_term()
        }
    }

    pub fn variable_names(&self) -> BTreeSet<&str> { 
        match self { 
            Term::Mono(m) => m.vars().names().collect(),
            Term::Prod(p) => p.variable_names()
        }
    }

    /// A monomial is already expanded; products are distributed.
    pub fn develop(&self) -> Algebraic { 
        match self { 
            Term::Mono(_) => Algebraic::Term(self.clone()),
            Term::Prod(p) => p.develop()
        }
    }

    /// Scales by an integral number; reals are rejected.
    pub fn scaled<N>(&self, n: N) -> Result<Term>
    where N: Into<Number> {
        let n = i64::try_from(n.into())?;
        Ok(self * n)
    }

    // monomials match on their variables, products on their operands.
    pub(crate) fn same_signature(&self, other: &Term) -> bool { 
        match (self, other) { 
            (Term::Mono(a), Term::Mono(b)) => a.vars() == b.vars(),
            (Term::Prod(a), Term::Prod(b)) => a.same_operands(b),
            _ => false
        }
    }

    // callers must check `same_signature` first.
    pub(crate) fn absorb(&mut self, other: &Term) { 
        let m = other.multiplier();
        match self { 
            Term::Mono(a) => a.add_multiplier(m),
            Term::Prod(a) => a.add_multiplier(m)
        }
    }
}

impl From<Mono> for Term { 
    fn from(m: Mono) -> Self {
        Term::Mono(m)
    }
}

impl From<LazyProd> for Term { 
    fn from(p: LazyProd) -> Self {
        Term::Prod(Box::new(p))
    }
}

impl Default for Term { 
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Term { 
    fn eq(&self, other: &Self) -> bool {
        match (self, other) { 
            (Term::Mono(a), Term::Mono(b)) => a == b,
            (Term::Prod(a), Term::Prod(b)) => a == b,
            _ => false
        }
    }
}

#[auto_ops]
impl MulAssign<&BigInt> for Term { 
    fn mul_assign(&mut self, rhs: &BigInt) {
        match self { 
            Term::Mono(m) => *m *= rhs,
            Term::Prod(p) => p.scale(rhs)
        }
    }
}

#[auto_ops]
impl MulAssign<&i64> for Term { 
    fn mul_assign(&mut self, rhs: &i64) {
        *self *= BigInt::from(*rhs)
    }
}

impl Neg for Term { 
    type Output = Term;
    fn neg(self) -> Term {
        self * -1i64
    }
}

impl Neg for &Term { 
    type Output = Term;
    fn neg(self) -> Term {
        self * -1i64
    }
}

impl Add<&Term> for &Term { 
    type Output = Algebraic;

    fn add(self, rhs: &Term) -> Algebraic {
        if self.same_signature(rhs) { 
            let mut res = self.clone();
            res.absorb(rhs);
            Algebraic::Term(res)
        } else { 
            Algebraic::Expr(Expression::from(self.clone()) + rhs)
        }
    }
}

impl Sub<&Term> for &Term { 
    type Output = Algebraic;

    fn sub(self, rhs: &Term) -> Algebraic {
        self + &(-rhs)
    }
}

// the chain absorbs the term.
impl Add<&Expression> for &Term { 
    type Output = Expression;

    fn add(self, rhs: &Expression) -> Expression {
        rhs + self
    }
}

impl Sub<&Expression> for &Term { 
    type Output = Expression;

    fn sub(self, rhs: &Expression) -> Expression {
        -rhs + self
    }
}

// deferred until `develop`.
impl Mul<&Term> for &Term { 
    type Output = Expression;

    fn mul(self, rhs: &Term) -> Expression {
        let p = LazyProd::of_terms(self, rhs);
        Expression::from(Term::from(p))
    }
}

impl Mul<&Expression> for &Term { 
    type Output = Expression;

    fn mul(self, rhs: &Expression) -> Expression {
        let p = LazyProd::of_term_expr(self, rhs);
        Expression::from(Term::from(p))
    }
}

forward_ref_binop!(impl Add, add for Term, Term => Algebraic);
forward_ref_binop!(impl Sub, sub for Term, Term => Algebraic);
forward_ref_binop!(impl Add, add for Term, Expression => Expression);
forward_ref_binop!(impl Sub, sub for Term, Expression => Expression);
forward_ref_binop!(impl Mul, mul for Term, Term => Expression);
forward_ref_binop!(impl Mul, mul for Term, Expression => Expression);

scalar_lhs_mul!(Mono, Term);

impl Display for Term { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self { 
            Term::Mono(m) => Display::fmt(m, f),
            Term::Prod(p) => Display::fmt(p, f)
        }
    }
}

impl Debug for Term { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
