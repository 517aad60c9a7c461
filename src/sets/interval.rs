use std::cmp::Ordering;
use std::fmt::Display;

use crate::error::{err, Result};
use super::Number;

/// A range of reals with independently open or closed ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval { 
    start: Number,
    stop: Number,
    include_start: bool,
    include_stop: bool
}

impl Interval { 
    pub fn new<A, B>(start: A, stop: B, include_start: bool, include_stop: bool) -> Result<Self>
    where A: Into<Number>, B: Into<Number> {
        let (start, stop) = (start.into(), stop.into());
        match start.partial_cmp(&stop) { 
            Some(Ordering::Greater) => err!(InvalidDomain, "start cannot be greater than stop: {start} > {stop}"),
            None => err!(InvalidDomain, "unordered bounds: {start}, {stop}"),
            _ => Ok(Self { start, stop, include_start, include_stop })
        }
    }

    pub fn closed<A, B>(start: A, stop: B) -> Result<Self>
    where A: Into<Number>, B: Into<Number> {
        Self::new(start, stop, true, true)
    }

    pub fn open<A, B>(start: A, stop: B) -> Result<Self>
    where A: Into<Number>, B: Into<Number> {
        Self::new(start, stop, false, false)
    }

    pub fn start(&self) -> Number { 
        self.start
    }

    pub fn stop(&self) -> Number { 
        self.stop
    }

    pub fn contains<N>(&self, n: N) -> bool
    where N: Into<Number> {
        let n = n.into();
        let lower = if self.include_start { 
            self.start <= n
        } else { 
            self.start < n
        };
        let upper = if self.include_stop { 
            n <= self.stop
        } else { 
            n < self.stop
        };
        lower && upper
    }
}

impl Display for Interval { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let a = if self.include_start { '[' } else { ']' };
        let b = if self.include_stop  { ']' } else { '[' };
        write!(f, "{a}{};{}{b}", self.start, self.stop)
    }
}

#[cfg(test)]
mod tests { 
    use super::*;
    use crate::Error;

    #[test]
    fn half_open() { 
        let i = Interval::new(1, 5, true, false).unwrap();
        assert!(i.contains(1));
        assert!(i.contains(4.999));
        assert!(!i.contains(5));
        assert!(!i.contains(0.5));

        let i = Interval::new(1, 5, false, true).unwrap();
        assert!(i.contains(5));
        assert!(!i.contains(1));
    }

    #[test]
    fn degenerate() { 
        let i = Interval::closed(2, 2).unwrap();
        assert!(i.contains(2));
        assert!(i.contains(2.0));

        let i = Interval::open(2, 2).unwrap();
        assert!(!i.contains(2));
    }

    #[test]
    fn unbounded() { 
        let i = Interval::new(f64::NEG_INFINITY, 0, false, true).unwrap();
        assert!(i.contains(-1_000_000));
        assert!(i.contains(0));
        assert!(!i.contains(0.001));
    }

    #[test]
    fn invalid() { 
        let e = Interval::new(5, 1, true, true);
        assert!(matches!(e, Err(Error::InvalidDomain(_))));

        let e = Interval::new(f64::NAN, 1, true, true);
        assert!(matches!(e, Err(Error::InvalidDomain(_))));
    }

    #[test]
    fn display() { 
        assert_eq!(Interval::new(1, 5, true, false).unwrap().to_string(), "[1;5[");
        assert_eq!(Interval::new(1, 5, false, true).unwrap().to_string(), "]1;5]");
        assert_eq!(Interval::open(f64::NEG_INFINITY, 0.5).unwrap().to_string(), "]-inf;0.5[");
    }
}
