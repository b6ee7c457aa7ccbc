//! Domain models and types for Heritage.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Normalized records** ([`Monument`], [`TypeEntry`], [`Coordinates`])
//! - **Query parameters** ([`MonumentQuery`])
//! - **Error types** ([`HeritageError`], [`FetchError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, HeritageError>`]:
//!
//! ```rust
//! use heritage::domain::{HeritageError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = heritage::config::HeritageConfig::default();
//!     config.validate().map_err(HeritageError::Configuration)?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod monument;
pub mod query;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{FetchError, HeritageError};
pub use monument::{Coordinates, Monument, TypeEntry};
pub use query::MonumentQuery;
pub use result::Result;
