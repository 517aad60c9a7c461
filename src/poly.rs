use std::collections::BTreeSet;
use std::ops::{Add, Mul, Neg, Sub};

use delegate::delegate;
use num_bigint::BigInt;
use derive_more::Display;

use crate::error::{ensure, Error, Result};
use crate::expr::{Algebraic, Expression, Term};

/// A term of natural degree in at most one variable.
#[derive(Clone, PartialEq, Debug, Display)]
#[display("{_0}")]
pub struct PolyTerm(Term);

impl PolyTerm { 
    pub fn new(term: Term) -> Result<Self> { 
        ensure!(term.is_polynom_term(), InvalidPolyTerm, "{term} is not valid for a polynom");
        Ok(Self(term))
    }

    pub fn term(&self) -> &Term { 
        &self.0
    }

    pub fn into_term(self) -> Term { 
        self.0
    }

    delegate! { 
        to self.0 { 
            pub fn multiplier(&self) -> &BigInt;
            pub fn degree(&self) -> isize;
            pub fn is_null(&self) -> bool;
            pub fn develop(&self) -> Algebraic;
            pub fn variable_names(&self) -> BTreeSet<&str>;
        }
    }
}

impl TryFrom<Term> for PolyTerm { 
    type Error = Error;

    fn try_from(term: Term) -> Result<Self> {
        Self::new(term)
    }
}

impl From<PolyTerm> for Term { 
    fn from(p: PolyTerm) -> Self {
        p.0
    }
}

// negation keeps the shape, so the result stays checked.
impl Neg for &PolyTerm { 
    type Output = PolyTerm;
    fn neg(self) -> PolyTerm {
        PolyTerm(-&self.0)
    }
}

impl Neg for PolyTerm { 
    type Output = PolyTerm;
    fn neg(self) -> PolyTerm {
        PolyTerm(-self.0)
    }
}

macro_rules! forward_to_term {
    ($imp:ident, $method:ident, $rhs:ty, $o:ty) => {
        impl $imp<$rhs> for &PolyTerm { 
            type Output = $o;
            fn $method(self, rhs: $rhs) -> $o {
                $imp::$method(&self.0, rhs)
            }
        }

        impl $imp<$rhs> for PolyTerm { 
            type Output = $o;
            fn $method(self, rhs: $rhs) -> $o {
                $imp::$method(&self.0, rhs)
            }
        }
    };
}

forward_to_term!(Add, add, &Term, Algebraic);
forward_to_term!(Add, add, Term, Algebraic);
forward_to_term!(Sub, sub, &Term, Algebraic);
forward_to_term!(Sub, sub, Term, Algebraic);
forward_to_term!(Add, add, &Expression, Expression);
forward_to_term!(Sub, sub, &Expression, Expression);
forward_to_term!(Mul, mul, &Term, Expression);
forward_to_term!(Mul, mul, &Expression, Expression);
forward_to_term!(Mul, mul, i64, Term);
