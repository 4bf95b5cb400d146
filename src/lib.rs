//! Sample-by-sample FIR and IIR filters.
//!
//! Both filters take pre-designed coefficients, keep a fixed amount of state
//! sized at construction, and never allocate while stepping.
//!
//! ```
//! use spartan_filters::{FirFilter, IirFilter};
//!
//! let mut fir = FirFilter::new(vec![0.25, 0.5, 0.25])?;
//! assert_eq!(fir.step(4.0), 1.0);
//!
//! // y[n] = x[n] + 0.5 y[n-1]
//! let mut iir = IirFilter::new(vec![1.0, 0.0], vec![1.0, -0.5])?;
//! assert_eq!(iir.step(1.0), 1.0);
//! assert_eq!(iir.step(0.0), 0.5);
//! # Ok::<(), spartan_filters::FilterError>(())
//! ```

pub mod config;
pub mod demo;
pub mod error;
pub mod fixtures;
pub mod output;
pub mod signal_processing;

pub use config::FilterConfig;
pub use error::{FilterError, Result};
pub use signal_processing::{Filter, FirFilter, IirFilter};
