/// A number held as its decimal digits, used as a stack during arithmetic.
///
/// Digits are stored most-significant-first as read from the literal, so
/// popping from the end yields them least-significant-first.
pub struct Digits {
    digits: Vec<u8>,
}

impl Digits {
    pub fn new() -> Self {
        Digits { digits: Vec::new() }
    }

    /// Builds a digit stack from a decimal literal.
    /// The caller guarantees `literal` contains only ASCII digits.
    pub fn from_literal(literal: &str) -> Self {
        let digits = literal.bytes().map(|b| b - b'0').collect();
        Digits { digits }
    }

    /// Pops the least-significant remaining digit.
    pub fn pop(&mut self) -> Option<u8> {
        self.digits.pop()
    }

    /// Pops the least-significant remaining digit, or 0 if exhausted.
    pub fn pop_or_zero(&mut self) -> u8 {
        self.digits.pop().unwrap_or(0)
    }

    pub fn push(&mut self, digit: u8) {
        debug_assert!(digit <= 9);
        self.digits.push(digit);
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Drops leading zeros, keeping at least one digit.
    ///
    /// After an arithmetic loop the most-significant digit sits on top of
    /// the stack, so this pops from the end.
    pub fn strip_leading_zeros(&mut self) {
        while self.digits.len() > 1 && self.digits.last() == Some(&0) {
            self.digits.pop();
        }
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Renders the number by draining the stack top-down.
    ///
    /// The arithmetic loops push least-significant digits first, leaving the
    /// most-significant digit on top, so draining restores left-to-right
    /// reading order.
    pub fn into_literal(mut self) -> String {
        let mut out = String::with_capacity(self.digits.len());
        while let Some(digit) = self.digits.pop() {
            out.push((b'0' + digit) as char);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_is_least_significant_first() {
        let mut digits = Digits::from_literal("123");
        assert_eq!(digits.pop(), Some(3));
        assert_eq!(digits.pop(), Some(2));
        assert_eq!(digits.pop(), Some(1));
        assert_eq!(digits.pop(), None);
        assert_eq!(digits.pop_or_zero(), 0);
    }

    #[test]
    fn test_render_arithmetic_order() {
        // An arithmetic loop pushes least-significant digits first.
        let mut result = Digits::new();
        result.push(6); // ones
        result.push(5); // tens
        result.push(4); // hundreds
        assert_eq!(result.into_literal(), "456");
    }

    #[test]
    fn test_strip_leading_zeros() {
        let mut result = Digits::new();
        result.push(3);
        result.push(2);
        result.push(1);
        result.push(0);
        result.push(0); // leading zeros on top of the stack
        result.strip_leading_zeros();
        assert_eq!(result.into_literal(), "123");
    }

    #[test]
    fn test_strip_keeps_a_lone_zero() {
        let mut result = Digits::new();
        result.push(0);
        result.push(0);
        result.push(0);
        assert!(result.is_zero());
        result.strip_leading_zeros();
        assert_eq!(result.into_literal(), "0");
    }
}
