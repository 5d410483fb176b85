//! Shared types for the célula registration core
//!
//! Common types used across the form core and the submission client:
//! domain models, error types, the option catalog, and utility helpers.

pub mod error;
pub mod models;
pub mod options;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use models::{CelulaDraft, CelulaRecord, DiaDaSemana, Field, PublicoAlvo};
pub use options::FormOptions;
