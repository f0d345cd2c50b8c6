//! Repeated appends onto a `String`.

/// Extension methods for building strings.
pub trait StringExt {
    /// Append `count` copies of `value`, reserving the space up front.
    ///
    /// Does nothing when `count` is zero or `value` is empty.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bitfn::text::StringExt;
    ///
    /// let mut s = String::from("a(b");
    /// s.push_repeated(")", 2);
    /// assert_eq!(s, "a(b))");
    /// ```
    fn push_repeated(&mut self, value: &str, count: usize) -> &mut Self;
}

impl StringExt for String {
    fn push_repeated(&mut self, value: &str, count: usize) -> &mut Self {
        if count == 0 || value.is_empty() {
            return self;
        }
        self.reserve(value.len() * count);
        for _ in 0..count {
            self.push_str(value);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_repeated() {
        let mut s = String::from(">");
        s.push_repeated("ab", 3);
        assert_eq!(s, ">ababab");
    }

    #[test]
    fn test_push_repeated_zero_count() {
        let mut s = String::from("x");
        s.push_repeated("ab", 0);
        assert_eq!(s, "x");
    }

    #[test]
    fn test_push_repeated_empty_value() {
        let mut s = String::new();
        s.push_repeated("", 10);
        assert!(s.is_empty());
        assert_eq!(s.capacity(), 0);
    }

    #[test]
    fn test_push_repeated_chains() {
        let mut s = String::new();
        s.push_repeated("-", 2).push_repeated("=", 1);
        assert_eq!(s, "--=");
    }
}
