use super::digits::IntoDigits;

pub fn superscript(i: isize) -> String {
    if i == 0 { 
        return '\u{2070}'.into()
    }

    let init = if i > 0 { 
        String::new()
    } else { 
        '\u{207B}'.into()
    };

    i.unsigned_abs().into_digits().into_iter().fold(init, |mut res, d| {
        let c = match d { 
            1 => '\u{00B9}',
            2 => '\u{00B2}',
            3 => '\u{00B3}',
            4 => '\u{2074}',
            5 => '\u{2075}',
            6 => '\u{2076}',
            7 => '\u{2077}',
            8 => '\u{2078}',
            9 => '\u{2079}',
            _ => '\u{2070}'
        };
        res.push(c);
        res
    })
}

// x^0 vanishes, x^1 is the bare name.
pub fn fmt_power(x: &str, d: isize) -> String { 
    match d { 
        0 => String::new(),
        1 => x.to_string(),
        _ => format!("{x}{}", superscript(d))
    }
}

pub fn paren_expr<S>(s: S) -> String
where S: std::fmt::Display {
    format!("({s})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_superscript() { 
        assert_eq!(superscript(0), "⁰");
        assert_eq!(superscript(1234567890), "¹²³⁴⁵⁶⁷⁸⁹⁰");
        assert_eq!(superscript(-1234567890), "⁻¹²³⁴⁵⁶⁷⁸⁹⁰");
    }

    #[test]
    fn test_fmt_power() { 
        assert_eq!(fmt_power("x", 0), "");
        assert_eq!(fmt_power("x", 1), "x");
        assert_eq!(fmt_power("x", 3), "x³");
        assert_eq!(fmt_power("y", -2), "y⁻²");
    }
}
