// ============================================================================
// Numeric Errors
// Error types for parsing and narrowing conversions
// ============================================================================

use std::fmt;

/// Errors from narrowing a big integer into a native integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Value exceeded the target type's maximum
    Overflow,
    /// Value below the target type's minimum
    Underflow,
    /// Negative value converted to an unsigned type
    NegativeToUnsigned,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: value exceeds target type maximum")
            },
            NumericError::Underflow => {
                write!(f, "arithmetic underflow: value below target type minimum")
            },
            NumericError::NegativeToUnsigned => {
                write!(f, "negative value cannot be represented as unsigned")
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric conversions
pub type NumericResult<T> = Result<T, NumericError>;

/// Reason a string was rejected by the radix parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// Nothing left after the optional sign
    Empty,
    /// Character outside the radix alphabet, `index` is a byte offset into the input
    InvalidDigit { index: usize, found: char },
    /// Radix outside 2..=36
    InvalidRadix(u32),
}

/// Error returned when parsing a big integer from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParseBigIntError {
    kind: ParseErrorKind,
}

impl ParseBigIntError {
    pub(crate) const fn new(kind: ParseErrorKind) -> Self {
        Self { kind }
    }

    /// The reason parsing failed.
    #[inline]
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

impl fmt::Display for ParseBigIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParseErrorKind::Empty => write!(f, "cannot parse integer from empty string"),
            ParseErrorKind::InvalidDigit { index, found } => {
                write!(f, "invalid digit {:?} at byte {}", found, index)
            },
            ParseErrorKind::InvalidRadix(radix) => {
                write!(f, "radix {} is outside the supported range 2..=36", radix)
            },
        }
    }
}

impl std::error::Error for ParseBigIntError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumericError::Overflow.to_string(),
            "arithmetic overflow: value exceeds target type maximum"
        );
        assert_eq!(
            ParseBigIntError::new(ParseErrorKind::Empty).to_string(),
            "cannot parse integer from empty string"
        );
        assert_eq!(
            ParseBigIntError::new(ParseErrorKind::InvalidDigit { index: 3, found: 'x' }).to_string(),
            "invalid digit 'x' at byte 3"
        );
        assert_eq!(
            ParseBigIntError::new(ParseErrorKind::InvalidRadix(1)).to_string(),
            "radix 1 is outside the supported range 2..=36"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumericError::Overflow, NumericError::Overflow);
        assert_ne!(NumericError::Overflow, NumericError::Underflow);
        assert_eq!(
            ParseBigIntError::new(ParseErrorKind::Empty).kind(),
            &ParseErrorKind::Empty
        );
    }
}
