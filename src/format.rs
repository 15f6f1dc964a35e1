//! Output formats for numbers.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// How script results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Format {
    /// Integers without a fractional part, everything else in the shortest
    /// form that reads back to the same value.
    #[default]
    Auto,
    /// A fixed number of digits after the decimal point.
    Fixed(usize),
}

impl Format {
    /// Formats `x` according to `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use detlibm::format::Format;
    /// #
    /// assert_eq!(Format::Auto.number(1024.0), "1024");
    /// assert_eq!(Format::Auto.number(0.25), "0.25");
    /// assert_eq!(Format::Fixed(3).number(0.25), "0.250");
    /// assert_eq!(Format::Fixed(3).number(f64::NEG_INFINITY), "-inf");
    /// ```
    pub fn number(&self, x: f64) -> String {
        if x.is_nan() {
            return String::from("nan");
        }
        if x.is_infinite() {
            return String::from(if x > 0.0 { "inf" } else { "-inf" });
        }

        match *self {
            Format::Fixed(digits) => format!("{x:.digits$}"),
            Format::Auto if x.fract() == 0.0 && x.abs() < 1e15 => {
                format!("{x:.0}")
            }
            Format::Auto if x != 0.0 && (x.abs() >= 1e15 || x.abs() < 1e-4) => {
                format!("{x:e}")
            }
            Format::Auto => format!("{x}"),
        }
    }
}

impl FromStr for Format {
    type Err = ParseFormatError;

    /// Parses either `auto` or `.N` for `N` fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "auto" {
            return Ok(Format::Auto);
        }

        let digits = s.strip_prefix('.').ok_or(ParseFormatError)?;

        Ok(Format::Fixed(digits.parse()?))
    }
}

#[derive(Debug)]
pub struct ParseFormatError;

impl From<ParseIntError> for ParseFormatError {
    fn from(_: ParseIntError) -> Self {
        ParseFormatError
    }
}

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid format, expected `auto` or `.N`")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parsing() {
        assert_eq!("auto".parse::<Format>().unwrap(), Format::Auto);
        assert_eq!(".6".parse::<Format>().unwrap(), Format::Fixed(6));
        assert!("6".parse::<Format>().is_err());
        assert!(".x".parse::<Format>().is_err());
    }

    #[test]
    fn auto() {
        assert_eq!(Format::Auto.number(-3.0), "-3");
        assert_eq!(Format::Auto.number(0.0), "0");
        assert_eq!(Format::Auto.number(1e300), "1e300");
        assert_eq!(Format::Auto.number(2.5e-7), "2.5e-7");
        assert_eq!(Format::Auto.number(f64::NAN), "nan");
    }
}
