use std::fmt;

const VISIBLE_TAIL: usize = 2;

/// Formats a sensitive string for log lines: everything but the last two
/// characters is replaced by `*`, so `0123456789` logs as `********89`.
/// Values of two characters or fewer are hidden entirely.
#[derive(Clone, Copy)]
pub struct Masked<T>(pub T);

impl<T: AsRef<str>> Masked<T> {
    fn write_masked(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.as_ref();
        let len = value.chars().count();
        if len <= VISIBLE_TAIL {
            return f.write_str(&"*".repeat(len));
        }
        let tail: String = value.chars().skip(len - VISIBLE_TAIL).collect();
        write!(f, "{}{}", "*".repeat(len - VISIBLE_TAIL), tail)
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_masked(f)
    }
}

impl<T: AsRef<str>> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_masked(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_keeps_last_two_digits() {
        let phone = String::from("0123456789");
        assert_eq!(Masked(&phone).to_string(), "********89");
        assert_eq!(format!("{:?}", Masked("0912")), "**12");
    }

    #[test]
    fn test_short_values_fully_hidden() {
        assert_eq!(Masked("").to_string(), "");
        assert_eq!(Masked("07").to_string(), "**");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(Masked("ñandú").to_string(), "***dú");
    }
}
