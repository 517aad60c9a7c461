use std::cmp::Ordering;
use std::fmt::Display;

use crate::error::{err, Error};

/// A value tested against a domain set: an integer or a real.
#[derive(Clone, Copy, Debug)]
pub enum Number { 
    Int(i64),
    Real(f64)
}

impl Number { 
    pub fn is_int(&self) -> bool { 
        matches!(self, Number::Int(_))
    }

    pub fn as_f64(&self) -> f64 { 
        match *self { 
            Number::Int(i) => i as f64,
            Number::Real(r) => r
        }
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Number { 
            fn from(value: $t) -> Self {
                Number::Int(value as i64)
            }
        })*
    };
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32);

impl From<f32> for Number { 
    fn from(value: f32) -> Self {
        Number::Real(value as f64)
    }
}

impl From<f64> for Number { 
    fn from(value: f64) -> Self {
        Number::Real(value)
    }
}

impl TryFrom<Number> for i64 { 
    type Error = Error;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        match value { 
            Number::Int(i) => Ok(i),
            Number::Real(r) => err!(UnsupportedOperand, "{r} is not an integer multiplier")
        }
    }
}

// integers and reals compare by value: 1 == 1.0.
impl PartialEq for Number { 
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number { 
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) { 
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64())
        }
    }
}

impl Display for Number { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self { 
            Number::Int(i) => write!(f, "{i}"),
            Number::Real(r) => write!(f, "{r}")
        }
    }
}
