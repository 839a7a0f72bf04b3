//! Special functions needed for significance testing
//!
//! Only what the Student t distribution requires is provided: the
//! log-gamma function and the regularized incomplete beta function.

const LANCZOS_G: f64 = 7.0;
const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.999_999_999_999_809_9,
    676.520_368_121_885_1,
    -1_259.139_216_722_402_8,
    771.323_428_777_653_1,
    -176.615_029_162_140_6,
    12.507_343_278_686_905,
    -0.138_571_095_265_720_12,
    9.984_369_578_019_572e-6,
    1.505_632_735_149_311_6e-7,
];

const BETA_CF_MAX_ITERATIONS: usize = 300;
const BETA_CF_EPSILON: f64 = 1e-15;
const BETA_CF_TINY: f64 = 1e-300;

/// Natural logarithm of the gamma function for `x > 0`.
///
/// Uses the Lanczos approximation (g = 7, n = 9) with the reflection formula
/// below 0.5. Accurate to roughly 15 significant digits.
///
/// # Examples
///
/// ```
/// # use iaq_stats::special::ln_gamma;
/// // Γ(5) = 4! = 24
/// assert!((ln_gamma(5.0) - 24.0_f64.ln()).abs() < 1e-12);
/// ```
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    if x < 0.5 {
        // Γ(x)Γ(1-x) = π / sin(πx)
        return std::f64::consts::PI.ln()
            - (std::f64::consts::PI * x).sin().abs().ln()
            - ln_gamma(1.0 - x);
    }

    let x = x - 1.0;
    let mut sum = LANCZOS_COEFFICIENTS[0];
    for (i, c) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        #[expect(clippy::cast_precision_loss)]
        let offset = i as f64;
        sum += c / (x + offset);
    }
    let t = x + LANCZOS_G + 0.5;
    0.5 * (2.0 * std::f64::consts::PI).ln() + (x + 0.5) * t.ln() - t + sum.ln()
}

/// Regularized incomplete beta function `I_x(a, b)`.
///
/// Returns a value in `[0.0, 1.0]`. `x` outside `[0.0, 1.0]` saturates;
/// `a` and `b` must be positive.
///
/// Evaluated with the modified Lentz continued fraction, switching to the
/// symmetry relation `I_x(a, b) = 1 - I_{1-x}(b, a)` where the fraction
/// converges faster.
///
/// # Examples
///
/// ```
/// # use iaq_stats::special::regularized_incomplete_beta;
/// // I_x(1, 1) is the uniform CDF
/// assert!((regularized_incomplete_beta(0.3, 1.0, 1.0) - 0.3).abs() < 1e-12);
/// // Symmetric parameters split at one half
/// assert!((regularized_incomplete_beta(0.5, 4.0, 4.0) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn regularized_incomplete_beta(x: f64, a: f64, b: f64) -> f64 {
    debug_assert!(a > 0.0 && b > 0.0, "beta parameters must be positive");
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let ln_front = ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln();
    let front = ln_front.exp();

    let result = if x < (a + 1.0) / (a + b + 2.0) {
        front * beta_continued_fraction(x, a, b) / a
    } else {
        1.0 - front * beta_continued_fraction(1.0 - x, b, a) / b
    };
    result.clamp(0.0, 1.0)
}

fn beta_continued_fraction(x: f64, a: f64, b: f64) -> f64 {
    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 - qab * x / qap;
    if d.abs() < BETA_CF_TINY {
        d = BETA_CF_TINY;
    }
    d = 1.0 / d;
    let mut h = d;

    for m in 1..=BETA_CF_MAX_ITERATIONS {
        #[expect(clippy::cast_precision_loss)]
        let m = m as f64;
        let m2 = 2.0 * m;

        // Even step
        let aa = m * (b - m) * x / ((qam + m2) * (a + m2));
        d = 1.0 + aa * d;
        if d.abs() < BETA_CF_TINY {
            d = BETA_CF_TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < BETA_CF_TINY {
            c = BETA_CF_TINY;
        }
        d = 1.0 / d;
        h *= d * c;

        // Odd step
        let aa = -(a + m) * (qab + m) * x / ((a + m2) * (qap + m2));
        d = 1.0 + aa * d;
        if d.abs() < BETA_CF_TINY {
            d = BETA_CF_TINY;
        }
        c = 1.0 + aa / c;
        if c.abs() < BETA_CF_TINY {
            c = BETA_CF_TINY;
        }
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < BETA_CF_EPSILON {
            break;
        }
    }

    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ln_gamma_factorials() {
        let mut factorial = 1.0_f64;
        for n in 1..15_u32 {
            let x = f64::from(n);
            assert!(
                (ln_gamma(x) - factorial.ln()).abs() < 1e-10,
                "ln_gamma({x}) mismatch"
            );
            factorial *= x;
        }
    }

    #[test]
    fn test_ln_gamma_half() {
        // Γ(1/2) = √π
        let expected = std::f64::consts::PI.sqrt().ln();
        assert!((ln_gamma(0.5) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_ln_gamma_reflection() {
        // Γ(1/4) ≈ 3.625609908221908
        assert!((ln_gamma(0.25) - 3.625_609_908_221_908_f64.ln()).abs() < 1e-10);
    }

    #[test]
    fn test_incomplete_beta_bounds() {
        assert_eq!(regularized_incomplete_beta(0.0, 2.0, 3.0), 0.0);
        assert_eq!(regularized_incomplete_beta(1.0, 2.0, 3.0), 1.0);
        assert_eq!(regularized_incomplete_beta(-0.5, 2.0, 3.0), 0.0);
        assert_eq!(regularized_incomplete_beta(1.5, 2.0, 3.0), 1.0);
    }

    #[test]
    fn test_incomplete_beta_closed_forms() {
        for &x in &[0.05, 0.2, 0.5, 0.7, 0.95] {
            // I_x(a, 1) = x^a
            let got = regularized_incomplete_beta(x, 3.0, 1.0);
            assert!((got - x.powi(3)).abs() < 1e-12, "I_{x}(3, 1) = {got}");

            // I_x(1, b) = 1 - (1 - x)^b
            let got = regularized_incomplete_beta(x, 1.0, 4.0);
            let expected = 1.0 - (1.0 - x).powi(4);
            assert!((got - expected).abs() < 1e-12, "I_{x}(1, 4) = {got}");
        }
    }

    #[test]
    fn test_incomplete_beta_symmetry() {
        for &x in &[0.1, 0.35, 0.6, 0.9] {
            let lhs = regularized_incomplete_beta(x, 2.5, 0.5);
            let rhs = 1.0 - regularized_incomplete_beta(1.0 - x, 0.5, 2.5);
            assert!((lhs - rhs).abs() < 1e-12);
        }
    }

    #[test]
    fn test_incomplete_beta_monotonic() {
        let mut prev = 0.0;
        for i in 1..100 {
            let x = f64::from(i) / 100.0;
            let value = regularized_incomplete_beta(x, 3.0, 0.5);
            assert!(value >= prev);
            prev = value;
        }
    }
}
