pub mod error;
pub mod format;
pub mod relocation;
pub mod residency;
pub mod types;

pub use error::ResidencyError;
pub use types::*;

/// Standard result type for all residency-calc operations
pub type ResidencyResult<T> = Result<T, ResidencyError>;
