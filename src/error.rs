use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Error { 
    #[display("invalid domain: {_0}")]
    InvalidDomain(String),

    #[display("invalid polynom term: {_0}")]
    InvalidPolyTerm(String),

    #[display("unsupported operand: {_0}")]
    UnsupportedOperand(String),
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

macro_rules! err {
    ($kind:ident, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        Err( crate::error::Error::$kind(msg) )
    }}
}

macro_rules! ensure {
    ($cond:expr, $kind:ident, $($arg:tt)*) => {{
        if !$cond { 
            return crate::error::err!($kind, $($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};

#[cfg(test)]
mod tests { 
    use super::*;

    fn check(n: i32) -> Result<i32> { 
        ensure!(n >= 0, UnsupportedOperand, "{n} is negative");
        Ok(n)
    }

    #[test]
    fn display() { 
        let e = Error::InvalidDomain("start cannot be greater than stop".into());
        assert_eq!(e.to_string(), "invalid domain: start cannot be greater than stop");
    }

    #[test]
    fn ensure_macro() { 
        assert_eq!(check(1), Ok(1));
        assert_eq!(check(-1), Err(Error::UnsupportedOperand("-1 is negative".into())));
    }
}
