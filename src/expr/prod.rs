use std::borrow::Cow;
use std::collections::BTreeSet;
use std::fmt::{Debug, Display};

use log::trace;
use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::{Algebraic, Expression, Mono, Term};

/// Operands of a deferred product, from the most general shape to the
/// most constrained one.
#[derive(Clone)]
pub enum Factors { 
    /// Two arbitrary sum chains.
    ExprExpr(Expression, Expression),
    /// A single monomial against a sum chain.
    TermExpr(Mono, Expression),
    /// Two monomials.
    TermTerm(Mono, Mono),
}

/// `multiplier · expr_1 · expr_2`, kept unexpanded until `develop`.
#[derive(Clone)]
pub struct LazyProd { 
    multiplier: BigInt,
    factors: Factors
}

impl LazyProd { 
    pub fn new(expr_1: Expression, expr_2: Expression) -> Self { 
        Self::from(Factors::ExprExpr(expr_1, expr_2))
    }

    pub fn term_expr(factor: Mono, expr: Expression) -> Self { 
        Self::from(Factors::TermExpr(factor, expr))
    }

    pub fn term_term(factor: Mono, term: Mono) -> Self { 
        Self::from(Factors::TermTerm(factor, term))
    }

    pub(crate) fn of_terms(a: &Term, b: &Term) -> Self { 
        match (a, b) { 
            (Term::Mono(a), Term::Mono(b)) => Self::term_term(a.clone(), b.clone()),
            _ => Self::new(Expression::from(a.clone()), Expression::from(b.clone()))
        }
    }

    pub(crate) fn of_term_expr(a: &Term, e: &Expression) -> Self { 
        match a { 
            Term::Mono(a) => Self::term_expr(a.clone(), e.clone()),
            Term::Prod(_) => Self::new(Expression::from(a.clone()), e.clone())
        }
    }

    pub fn multiplier(&self) -> &BigInt { 
        &self.multiplier
    }

    pub fn factors(&self) -> &Factors { 
        &self.factors
    }

    pub fn expr_1(&self) -> Cow<'_, Expression> { 
        match &self.factors { 
            Factors::ExprExpr(e, _) => Cow::Borrowed(e),
            Factors::TermExpr(m, _) | 
            Factors::TermTerm(m, _) => Cow::Owned(Expression::from(m.clone()))
        }
    }

    pub fn expr_2(&self) -> Cow<'_, Expression> { 
        match &self.factors { 
            Factors::ExprExpr(_, e) | 
            Factors::TermExpr(_, e) => Cow::Borrowed(e),
            Factors::TermTerm(_, m) => Cow::Owned(Expression::from(m.clone()))
        }
    }

    pub fn degree(&self) -> isize { 
        match &self.factors { 
            Factors::ExprExpr(a, b) => a.degree() + b.degree(),
            Factors::TermExpr(a, b) => a.degree() + b.degree(),
            Factors::TermTerm(a, b) => a.degree() + b.degree(),
        }
    }

    pub fn is_null(&self) -> bool { 
        self.multiplier.is_zero() || match &self.factors { 
            Factors::ExprExpr(a, b) => a.is_null() || b.is_null(),
            Factors::TermExpr(a, b) => a.is_null() || b.is_null(),
            Factors::TermTerm(a, b) => a.is_null() || b.is_null(),
        }
    }

    pub fn is_polynom_term(&self) -> bool { 
        match &self.factors { 
            Factors::ExprExpr(a, b) => a.is_polynom() && b.is_polynom(),
            Factors::TermExpr(a, b) => a.is_polynom_term() && b.is_polynom(),
            Factors::TermTerm(a, b) => a.is_polynom_term() && b.is_polynom_term(),
        }
    }

    pub fn variable_names(&self) -> BTreeSet<&str> { 
        match &self.factors { 
            Factors::ExprExpr(a, b) => &a.variable_names() | &b.variable_names(),
            Factors::TermExpr(a, b) => a.vars().names().chain(b.variable_names()).collect(),
            Factors::TermTerm(a, b) => a.vars().names().chain(b.vars().names()).collect(),
        }
    }

    /// Operands agree up to commutation.
    pub fn same_operands(&self, other: &LazyProd) -> bool { 
        let (a1, a2) = (self.expr_1(), self.expr_2());
        let (b1, b2) = (other.expr_1(), other.expr_2());
        (a1 == b1 && a2 == b2) || (a1 == b2 && a2 == b1)
    }

    /// Distributes the product into a sum of monomials.
    pub fn develop(&self) -> Algebraic { 
        trace!("develop: {self}");

        let mut res = match &self.factors { 
            Factors::TermTerm(a, b) => { 
                Algebraic::Term(Term::from(a * b))
            },
            Factors::TermExpr(a, e) => { 
                let factor = Term::from(a.clone());
                let e = e.develop();
                let mut acc = &factor * e.term();
                for t in e.iter().skip(1) { 
                    acc += &factor * t;
                }
                Algebraic::Expr(acc.develop())
            },
            Factors::ExprExpr(e1, e2) => { 
                let e1 = e1.develop();
                let mut acc = e1.term() * e2;
                for t in e1.iter().skip(1) { 
                    acc += t * e2;
                }
                Algebraic::Expr(acc.develop())
            }
        };

        if !self.multiplier.is_one() { 
            res *= &self.multiplier;
        }

        trace!("developed: {res}");
        res
    }

    pub(crate) fn add_multiplier(&mut self, m: &BigInt) { 
        self.multiplier += m
    }

    pub(crate) fn scale(&mut self, n: &BigInt) { 
        self.multiplier *= n
    }
}

impl From<Factors> for LazyProd { 
    fn from(factors: Factors) -> Self {
        Self { multiplier: BigInt::one(), factors }
    }
}

impl PartialEq for LazyProd { 
    fn eq(&self, other: &Self) -> bool {
        self.multiplier == other.multiplier && self.same_operands(other)
    }
}

impl Display for LazyProd { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use crate::util::format::paren_expr;

        let (a, b) = (paren_expr(self.expr_1()), paren_expr(self.expr_2()));
        if !self.multiplier.is_one() { 
            write!(f, "{}{a}{b}", self.multiplier)
        } else { 
            write!(f, "{a}{b}")
        }
    }
}

impl Debug for LazyProd { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::term;

    fn x(m: i64, e: isize) -> Mono { 
        Mono::new(m, [("x", e)])
    }

    #[test]
    fn term_term() { 
        let p = LazyProd::term_term(x(2, 3), x(5, 2));
        assert_eq!(p.degree(), 5);
        assert_eq!(p.develop(), Algebraic::Term(term!(10, x = 5)));
    }

    #[test]
    fn term_term_distinct_vars() { 
        let p = LazyProd::term_term(x(2, 1), Mono::new(3, [("y", 2)]));
        assert_eq!(p.develop(), Algebraic::Term(term!(6, x = 1, y = 2)));
    }

    #[test]
    fn term_term_cancels_exponent() { 
        let p = LazyProd::term_term(x(2, 1), x(1, -1));
        let d = p.develop();
        assert_eq!(d, Algebraic::Term(term!(2)));
        assert_eq!(d.degree(), 0);
    }

    #[test]
    fn term_expr() { 
        // 2x(x² + 3) = 2x³ + 6x
        let e = Expression::from(x(1, 2)) + Term::from(x(3, 0));
        let p = LazyProd::term_expr(x(2, 1), e);

        assert_eq!(p.degree(), 3);
        assert_eq!(p.develop(), Algebraic::Expr(Expression::from(x(2, 3)) + Term::from(x(6, 1))));
    }

    #[test]
    fn expr_expr() { 
        // (x + 1)(x + 2) = x² + 3x + 2
        let a = Expression::from(x(1, 1)) + Term::from(x(1, 0));
        let b = Expression::from(x(1, 1)) + Term::from(x(2, 0));
        let p = LazyProd::new(a, b);

        let expected = Expression::from(x(1, 2)) + Term::from(x(3, 1)) + Term::from(x(2, 0));
        assert_eq!(p.develop(), Algebraic::Expr(expected));
    }

    #[test]
    fn multiplier_survives_develop() { 
        let mut p = LazyProd::term_term(x(2, 1), x(3, 1));
        p.scale(&BigInt::from(-2));
        assert_eq!(p.develop(), Algebraic::Term(term!(-12, x = 2)));
    }

    #[test]
    fn is_null() { 
        let p = LazyProd::term_term(x(0, 1), x(3, 1));
        assert!(p.is_null());

        let mut p = LazyProd::term_term(x(1, 1), x(3, 1));
        assert!(!p.is_null());
        p.scale(&BigInt::zero());
        assert!(p.is_null());
    }

    #[test]
    fn same_operands_commute() { 
        let a = Expression::from(x(1, 1)) + Term::from(x(1, 0));
        let b = Expression::from(x(1, 2));
        let p = LazyProd::new(a.clone(), b.clone());
        let q = LazyProd::new(b.clone(), a.clone());
        let r = LazyProd::new(a.clone(), a.clone());

        assert!(p.same_operands(&q));
        assert_eq!(p, q);
        assert!(!p.same_operands(&r));
    }

    #[test]
    fn products_merge_in_chain() { 
        let a = Expression::from(x(1, 1)) + Term::from(x(1, 0));
        let b = Expression::from(x(1, 2));
        let s = (&a * &b) + (&b * &a);

        assert_eq!(s.nterms(), 1);
        assert_eq!(s.term().multiplier(), &BigInt::from(2));
        assert_eq!(s.to_string(), "2(x + 1)(x²)");
    }

    #[test]
    fn is_polynom_term() { 
        let a = Expression::from(x(1, 1)) + Term::from(x(1, 0));
        let p = LazyProd::new(a.clone(), a.clone());
        assert!(p.is_polynom_term());

        let q = LazyProd::term_expr(x(1, -1), a);
        assert!(!q.is_polynom_term());
    }

    #[test]
    fn variable_names() { 
        let p = LazyProd::term_expr(x(1, 1), Expression::from(term!(1, y = 1)));
        assert_eq!(p.variable_names(), BTreeSet::from(["x", "y"]));
    }

    #[test]
    fn idempotent() { 
        let a = Expression::from(x(1, 1)) + Term::from(x(-2, 0));
        let p = LazyProd::new(a.clone(), a);
        let d1 = Expression::from(p.develop());
        let d2 = d1.develop();
        assert_eq!(d1, d2);
    }
}
