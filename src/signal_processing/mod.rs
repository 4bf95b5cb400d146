pub mod filter;
pub mod fir;
pub mod iir;

pub use filter::Filter;
pub use fir::FirFilter;
pub use iir::IirFilter;
