pub mod error;
pub mod format;
pub mod stats;
pub mod types;

pub use error::*;
pub use format::{format_basis_points, CurrencyFormatter, PercentFormatter};
pub use types::*;
