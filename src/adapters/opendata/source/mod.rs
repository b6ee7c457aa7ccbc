//! Monument source implementations
//!
//! The `MonumentSource` trait defines the common interface; each dataset of
//! the catalog has its own implementation.

pub mod armentieres;
pub mod lille;
pub mod roubaix;
mod r#trait;

pub use armentieres::ArmentieresSource;
pub use lille::LilleSource;
pub use r#trait::MonumentSource;
pub use roubaix::RoubaixSource;
