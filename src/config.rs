//! Coefficient configuration for the filters.
//!
//! Coefficients are designed elsewhere (MATLAB/Octave, scipy, etc.) and
//! handed in here, either through `FilterConfig::default()` or a TOML file:
//!
//! ```toml
//! [fir]
//! coefficients = [0.0, 0.5, 0.75, 0.5, 0.0]
//!
//! [iir]
//! b = [0.184523494307847, 0.0, -0.184523494307847]
//! a = [1.0, -1.59697023454539, 0.630953011384306]
//! ```
//!
//! Either table may be omitted, in which case its default is used.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FilterError, Result};
use crate::signal_processing::{FirFilter, IirFilter};

/// Coefficients for both filter kinds
///
/// # Example
/// ```
/// use spartan_filters::config::FilterConfig;
///
/// let config: FilterConfig = "[fir]\ncoefficients = [0.25, 0.5, 0.25]"
///     .parse()
///     .unwrap();
/// assert_eq!(config.fir.coefficients.len(), 3);
/// assert_eq!(config.iir.b.len(), 3);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
    /// FIR tap weights
    pub fir: FirConfig,
    /// IIR numerator/denominator
    pub iir: IirConfig,
}

impl FilterConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

impl std::str::FromStr for FilterConfig {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_toml_str(s)
    }
}

/// FIR filter configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FirConfig {
    /// Tap weights; their count is the tap count
    pub coefficients: Vec<f64>,
}

impl Default for FirConfig {
    fn default() -> Self {
        Self {
            coefficients: vec![0.0, 0.5, 0.75, 0.5, 0.0],
        }
    }
}

impl FirConfig {
    pub fn build(&self) -> Result<FirFilter> {
        FirFilter::new(self.coefficients.clone())
    }
}

/// IIR filter configuration
///
/// Unlike `IirFilter::new`, `b` and `a` may differ in length here; `build`
/// zero-pads the shorter one.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IirConfig {
    /// Feedforward (numerator) coefficients
    pub b: Vec<f64>,
    /// Feedback (denominator) coefficients, `a[0]` unused
    pub a: Vec<f64>,
    /// Filter order; derived from the longer coefficient vector when absent
    #[serde(default)]
    pub order: Option<usize>,
}

impl Default for IirConfig {
    fn default() -> Self {
        // 2nd-order band-pass
        Self {
            b: vec![0.184523494307847, 0.0, -0.184523494307847],
            a: vec![1.0, -1.59697023454539, 0.630953011384306],
            order: None,
        }
    }
}

impl IirConfig {
    /// Order implied by the coefficient vectors
    pub fn natural_order(&self) -> usize {
        self.b.len().max(self.a.len()).saturating_sub(1)
    }

    pub fn build(&self) -> Result<IirFilter> {
        let natural = self.natural_order();
        let order = match self.order {
            Some(order) if order < natural => {
                return Err(FilterError::InvalidConfiguration(format!(
                    "IIR order {} is below the {} implied by the coefficients",
                    order, natural
                )));
            }
            Some(order) => order,
            None => natural,
        };

        let b = pad_coefficients(&self.b, order + 1)?;
        let a = pad_coefficients(&self.a, order + 1)?;
        IirFilter::new(b, a)
    }
}

/// Zero-pad a coefficient vector to `len` entries
///
/// # Errors
/// Returns `FilterError::InvalidConfiguration` if `coefficients` is already
/// longer than `len`
pub fn pad_coefficients(coefficients: &[f64], len: usize) -> Result<Vec<f64>> {
    if coefficients.len() > len {
        return Err(FilterError::InvalidConfiguration(format!(
            "cannot pad {} coefficients down to {}",
            coefficients.len(),
            len
        )));
    }
    let mut padded = coefficients.to_vec();
    padded.resize(len, 0.0);
    Ok(padded)
}
