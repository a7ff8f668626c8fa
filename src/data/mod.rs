//! Data layer: the numeric table, loading, and load errors.
//!
//! Architecture:
//! ```text
//!      .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  parse file, keep requested columns → Dataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │ Dataset  │  named f64 columns, one row per time sample
//!   └──────────┘
//! ```

pub mod error;
pub mod loader;
pub mod model;

pub use error::{DataError, ErrorKind};
pub use model::Dataset;
