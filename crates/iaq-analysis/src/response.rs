//! Decoding of survey answers recorded with mixed encodings
//!
//! Survey exports mix numeric codes (`0`, `1`, `2`) and textual answers
//! (`Yes`, `No`) across columns, sometimes within one column. Every routine
//! decodes cells through this module instead of special-casing encodings.

use std::fmt;

/// Canonical state of a frequency or presence answer.
///
/// | encoding          | state          |
/// |-------------------|----------------|
/// | `1`, `Yes`        | `Present`      |
/// | `2`               | `Intermediate` |
/// | `0`, `No`         | `Absent`       |
/// | anything else     | `Unknown`      |
///
/// For stressor questions `Present` reads as "often/always",
/// `Intermediate` as "sometimes" and `Absent` as "rarely/never".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Response {
    Present,
    Intermediate,
    Absent,
    Unknown,
}

impl Response {
    /// Decodes a non-missing cell.
    ///
    /// Text is matched case-insensitively after trimming; numbers may be
    /// written as floats (`1.0`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use iaq_analysis::response::Response;
    /// assert_eq!(Response::decode("Yes"), Response::Present);
    /// assert_eq!(Response::decode("1.0"), Response::Present);
    /// assert_eq!(Response::decode("2"), Response::Intermediate);
    /// assert_eq!(Response::decode(" no "), Response::Absent);
    /// assert_eq!(Response::decode("Maybe"), Response::Unknown);
    /// ```
    #[must_use]
    pub fn decode(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("yes") {
            return Self::Present;
        }
        if value.eq_ignore_ascii_case("no") {
            return Self::Absent;
        }
        match value.parse::<f64>() {
            Ok(code) => Self::from_code(code),
            Err(_) => Self::Unknown,
        }
    }

    #[allow(clippy::float_cmp)]
    fn from_code(code: f64) -> Self {
        if code == 1.0 {
            Self::Present
        } else if code == 2.0 {
            Self::Intermediate
        } else if code == 0.0 {
            Self::Absent
        } else {
            Self::Unknown
        }
    }

    #[must_use]
    pub fn is_known(self) -> bool {
        self != Self::Unknown
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Present => "present",
            Self::Intermediate => "intermediate",
            Self::Absent => "absent",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Decodes a non-missing cell as a numeric signal for correlation.
///
/// `Yes` is 1 and `No` is 0, numeric values pass through unchanged, and
/// any other value (including non-finite numbers) counts as 0.
///
/// # Examples
///
/// ```
/// # use iaq_analysis::response::decode_signal;
/// assert_eq!(decode_signal("Yes"), 1.0);
/// assert_eq!(decode_signal("No"), 0.0);
/// assert_eq!(decode_signal("2"), 2.0);
/// assert_eq!(decode_signal("Sometimes"), 0.0);
/// ```
#[must_use]
pub fn decode_signal(value: &str) -> f64 {
    let value = value.trim();
    if value.eq_ignore_ascii_case("yes") {
        return 1.0;
    }
    if value.eq_ignore_ascii_case("no") {
        return 0.0;
    }
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_numeric_codes() {
        assert_eq!(Response::decode("0"), Response::Absent);
        assert_eq!(Response::decode("1"), Response::Present);
        assert_eq!(Response::decode("2"), Response::Intermediate);
        assert_eq!(Response::decode("2.0"), Response::Intermediate);
        assert_eq!(Response::decode("3"), Response::Unknown);
        assert_eq!(Response::decode("-1"), Response::Unknown);
        assert_eq!(Response::decode("1.5"), Response::Unknown);
    }

    #[test]
    fn test_decode_text_answers() {
        assert_eq!(Response::decode("Yes"), Response::Present);
        assert_eq!(Response::decode("YES"), Response::Present);
        assert_eq!(Response::decode("No"), Response::Absent);
        assert_eq!(Response::decode("no"), Response::Absent);
        assert_eq!(Response::decode("Often"), Response::Unknown);
    }

    #[test]
    fn test_numeric_and_text_encodings_agree() {
        assert_eq!(Response::decode("1"), Response::decode("Yes"));
        assert_eq!(Response::decode("0"), Response::decode("No"));
    }

    #[test]
    fn test_is_known() {
        assert!(Response::Present.is_known());
        assert!(Response::Absent.is_known());
        assert!(!Response::Unknown.is_known());
    }

    #[test]
    fn test_decode_signal_passthrough_and_default() {
        assert_eq!(decode_signal("1"), 1.0);
        assert_eq!(decode_signal("0.5"), 0.5);
        assert_eq!(decode_signal(" yes "), 1.0);
        assert_eq!(decode_signal("inf"), 0.0);
        assert_eq!(decode_signal("n/a?"), 0.0);
    }
}
