//! Statistical primitives for the indoor air quality survey analysis.
//!
//! This crate provides the numeric building blocks used by the analysis
//! routines, with no knowledge of survey columns or sensor schemas:
//!
//! - **Descriptive statistics**: Calculate min, max, mean, median and spread
//! - **Distributions**: Normalize category counts to percentages
//! - **Correlation**: Pearson correlation with two-tailed significance testing
//! - **Special functions**: Log-gamma and the regularized incomplete beta function
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`distribution`]: Percentage distributions of categorical values
//! - [`correlation`]: Pearson correlation, p-values and significance markers
//! - [`special`]: Special functions backing the t distribution
//!
//! # Examples
//!
//! ## Computing descriptive statistics
//!
//! ```
//! use iaq_stats::descriptive::DescriptiveStats;
//!
//! let co2_ppm = [400.0, 420.0, 1500.0];
//! let stats = DescriptiveStats::new(co2_ppm).unwrap();
//! assert_eq!(stats.max, 1500.0);
//! ```
//!
//! ## Computing a percentage distribution
//!
//! ```
//! use iaq_stats::distribution::Distribution;
//!
//! let dist = Distribution::from_values(["Female", "Male", "Female", "Female"]);
//! assert_eq!(dist.percentage_of("Female"), 75.0);
//! ```
//!
//! ## Testing a correlation
//!
//! ```
//! use iaq_stats::correlation::{pearson, Correlation, UndefinedReason};
//!
//! let workload = [1.0, 1.0, 1.0];
//! let fatigue = [1.0, 0.0, 1.0];
//! assert_eq!(
//!     pearson(&workload, &fatigue),
//!     Correlation::Undefined(UndefinedReason::ZeroVariance)
//! );
//! ```

pub mod correlation;
pub mod descriptive;
pub mod distribution;
pub mod special;
