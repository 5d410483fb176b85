//! Célula registration form core
//!
//! The validation and submission workflow behind the registration screen:
//! - [`mask`]: pure input formatters (phone mask, time formatting)
//! - [`schema`]: declarative per-field validation rules
//! - [`controller`]: form state machine orchestrating formatter → validator
//!   → gateway
//! - [`gateway`]: the [`SubmissionGateway`] seam to the remote persistence
//!   and object-storage collaborators

pub mod controller;
pub mod gateway;
pub mod mask;
pub mod schema;

pub use controller::{FormController, FormState, Notice, NoticeKind, SubmitOutcome, UploadOutcome};
pub use gateway::SubmissionGateway;
pub use schema::{FieldErrors, FormSchema};
