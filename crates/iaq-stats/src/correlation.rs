//! Pearson product-moment correlation with significance testing
//!
//! [`pearson`] computes the correlation coefficient `r` between two paired
//! sequences together with its two-tailed p-value under the null hypothesis
//! of no linear association (Student t distribution, `n - 2` degrees of
//! freedom).
//!
//! Correlation is undefined for fewer than two pairs or when either sequence
//! is constant. This is reported as [`Correlation::Undefined`] instead of a
//! NaN coefficient.

use std::fmt;

use crate::special::regularized_incomplete_beta;

/// Threshold below which a correlation is marked [`Significance::Strong`].
pub const STRONG_SIGNIFICANCE_LEVEL: f64 = 0.01;
/// Threshold below which a correlation is marked [`Significance::Weak`].
pub const WEAK_SIGNIFICANCE_LEVEL: f64 = 0.05;

/// A defined Pearson correlation result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PearsonCorrelation {
    /// Correlation coefficient, within `-1.0..=1.0`.
    pub r: f64,
    /// Two-tailed p-value, within `0.0..=1.0`.
    pub p_value: f64,
    /// Number of paired observations.
    pub n: usize,
}

impl PearsonCorrelation {
    /// Significance class of this correlation's p-value.
    #[must_use]
    pub fn significance(&self) -> Significance {
        Significance::from_p_value(self.p_value)
    }
}

/// Why a correlation could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndefinedReason {
    /// Fewer than two paired observations.
    TooFewObservations { n: usize },
    /// At least one of the sequences has no variance.
    ZeroVariance,
}

impl fmt::Display for UndefinedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewObservations { n } => write!(f, "too few observations (n={n})"),
            Self::ZeroVariance => f.write_str("zero variance"),
        }
    }
}

/// Outcome of a correlation computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Correlation {
    Defined(PearsonCorrelation),
    Undefined(UndefinedReason),
}

impl Correlation {
    /// Returns the defined result, if any.
    #[must_use]
    pub fn defined(&self) -> Option<&PearsonCorrelation> {
        match self {
            Self::Defined(c) => Some(c),
            Self::Undefined(_) => None,
        }
    }
}

/// Significance annotation of a p-value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Significance {
    /// `p < 0.01`
    Strong,
    /// `0.01 <= p < 0.05`
    Weak,
    /// `p >= 0.05`
    NotSignificant,
}

impl Significance {
    /// Classifies a p-value.
    ///
    /// # Examples
    ///
    /// ```
    /// # use iaq_stats::correlation::Significance;
    /// assert_eq!(Significance::from_p_value(0.009), Significance::Strong);
    /// assert_eq!(Significance::from_p_value(0.01), Significance::Weak);
    /// assert_eq!(Significance::from_p_value(0.05), Significance::NotSignificant);
    /// ```
    #[must_use]
    pub fn from_p_value(p_value: f64) -> Self {
        if p_value < STRONG_SIGNIFICANCE_LEVEL {
            Self::Strong
        } else if p_value < WEAK_SIGNIFICANCE_LEVEL {
            Self::Weak
        } else {
            Self::NotSignificant
        }
    }

    /// Conventional asterisk marker: `**`, `*` or empty.
    #[must_use]
    pub fn marker(self) -> &'static str {
        match self {
            Self::Strong => "**",
            Self::Weak => "*",
            Self::NotSignificant => "",
        }
    }
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.marker())
    }
}

/// Computes the Pearson correlation between two paired sequences.
///
/// # Panics
///
/// Panics if `xs` and `ys` have different lengths.
///
/// # Examples
///
/// ```
/// # use iaq_stats::correlation::{pearson, Correlation, Significance};
/// let condition = [1.0, 0.0, 1.0, 0.0];
/// let symptom = [1.0, 0.0, 1.0, 0.0];
/// let Correlation::Defined(c) = pearson(&condition, &symptom) else {
///     panic!("expected a defined correlation");
/// };
/// assert!((c.r - 1.0).abs() < 1e-12);
/// assert_eq!(c.significance(), Significance::Strong);
/// ```
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> Correlation {
    assert_eq!(xs.len(), ys.len(), "paired sequences must have equal length");

    let n = xs.len();
    if n < 2 {
        return Correlation::Undefined(UndefinedReason::TooFewObservations { n });
    }
    if is_constant(xs) || is_constant(ys) {
        return Correlation::Undefined(UndefinedReason::ZeroVariance);
    }

    // Rescaled into [-1, 1] so the sums of squares cannot overflow
    let scale_x = max_abs(xs);
    let scale_y = max_abs(ys);
    let count = n as f64;
    let mean_x = xs.iter().map(|x| x / scale_x).sum::<f64>() / count;
    let mean_y = ys.iter().map(|y| y / scale_y).sum::<f64>() / count;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x / scale_x - mean_x;
        let dy = y / scale_y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let r = (sxy / (sxx.sqrt() * syy.sqrt())).clamp(-1.0, 1.0);
    let p_value = two_tailed_p_value(r, n);

    Correlation::Defined(PearsonCorrelation { r, p_value, n })
}

/// Two-tailed p-value of `r` for `n` pairs.
///
/// With `df = n - 2` and `t² = r² df / (1 - r²)`, the p-value is
/// `I_{df/(df+t²)}(df/2, 1/2)`, and `df/(df+t²)` reduces to `1 - r²`.
/// Two pairs always fit a line exactly, so their p-value is 1.
#[expect(clippy::cast_precision_loss)]
fn two_tailed_p_value(r: f64, n: usize) -> f64 {
    if n <= 2 {
        return 1.0;
    }
    let df = (n - 2) as f64;
    regularized_incomplete_beta(1.0 - r * r, df / 2.0, 0.5)
}

/// Largest magnitude in a sequence that is not constant, so never zero.
fn max_abs(values: &[f64]) -> f64 {
    values.iter().map(|v| v.abs()).fold(0.0, f64::max)
}

#[allow(clippy::float_cmp)]
fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}
