use std::fmt::{Formatter, Result};

/// Formats a number the way it is written in expressions: in its shortest round-trip form, with
/// integral values printed without a fractional part. Negative zero is printed as `0`.
pub fn fmt_number(f: &mut Formatter, value: f64) -> Result {
    if value == 0.0 {
        write!(f, "0")
    } else {
        write!(f, "{}", value)
    }
}

#[cfg(test)]
mod tests {
    use std::fmt::{Display, Formatter, Result};
    use super::*;

    struct Number(f64);

    impl Display for Number {
        fn fmt(&self, f: &mut Formatter) -> Result {
            fmt_number(f, self.0)
        }
    }

    #[test]
    fn integral_values() {
        assert_eq!(Number(2.0).to_string(), "2");
        assert_eq!(Number(-1.0).to_string(), "-1");
        assert_eq!(Number(-0.0).to_string(), "0");
    }

    #[test]
    fn fractional_values() {
        assert_eq!(Number(1.5).to_string(), "1.5");
        assert_eq!(Number(0.25).to_string(), "0.25");
    }
}
