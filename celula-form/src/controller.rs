//! Form state controller
//!
//! Single source of truth for the in-progress record and its error state.
//! Mediates between raw input events and the schema, and orchestrates
//! submission through the gateway. One controller per screen instance; no
//! state is shared across instances.

use crate::gateway::SubmissionGateway;
use crate::mask::{format_time, phone_mask};
use crate::schema::{FieldErrors, FormSchema};
use shared::{CelulaDraft, Field};
use tracing::{debug, info, warn};

// ============================================================================
// States and outcomes
// ============================================================================

/// Lifecycle of one form instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    /// Initial state, and the state after a successful submission
    #[default]
    Empty,
    /// At least one field has been touched
    Editing,
    /// Validation passed, persistence in flight
    Submitting,
}

/// Severity of a user-visible notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// User-visible notice — the only error-reporting channel of this layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Record persisted; the form was reset to empty
    Submitted,
    /// Validation failed; error state populated, no network call attempted
    Invalid,
    /// Persistence failed; values retained, backend message carried verbatim
    Failed(String),
    /// Submit is currently disabled (photo upload or submission in flight)
    Blocked,
}

impl SubmitOutcome {
    /// The blocking notice shown for this outcome
    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::Submitted => Notice::success("Célula cadastrada com sucesso!"),
            SubmitOutcome::Invalid => {
                Notice::error("Por favor, preencha todos os campos obrigatórios.")
            }
            SubmitOutcome::Failed(message) => {
                Notice::error(format!("Falha ao cadastrar célula: {message}"))
            }
            SubmitOutcome::Blocked => Notice::error("Aguarde o envio da foto."),
        }
    }
}

/// Result of a photo upload attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Upload succeeded; the public URL is now in the photo field
    Uploaded(String),
    /// Upload failed; the photo field and all other fields are untouched
    Failed(String),
}

impl UploadOutcome {
    /// The notice shown for this outcome, if any
    pub fn notice(&self) -> Option<Notice> {
        match self {
            UploadOutcome::Uploaded(_) => None,
            UploadOutcome::Failed(_) => {
                Some(Notice::error("Falha ao enviar foto. Verifique sua conexão."))
            }
        }
    }
}

// ============================================================================
// Controller
// ============================================================================

/// State controller for one registration form instance
#[derive(Debug)]
pub struct FormController {
    schema: FormSchema,
    draft: CelulaDraft,
    errors: FieldErrors,
    state: FormState,
    photo_uploading: bool,
}

impl FormController {
    /// Create an empty form bound to a schema
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            draft: CelulaDraft::default(),
            errors: FieldErrors::new(),
            state: FormState::Empty,
            photo_uploading: false,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn draft(&self) -> &CelulaDraft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Inline error message for one field, if any
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.errors.get(field.name()).map(String::as_str)
    }

    /// Whether the submit control should be enabled
    ///
    /// A boolean gate, not a lock: the photo-upload flag and the
    /// `Submitting` state are the only protection against double submit.
    pub fn submit_enabled(&self) -> bool {
        !self.photo_uploading && self.state != FormState::Submitting
    }

    pub fn photo_uploading(&self) -> bool {
        self.photo_uploading
    }

    // ==================== Field updates ====================

    /// Update one field from raw input
    ///
    /// Phone input is routed through the display mask. A field's prior
    /// error is cleared as soon as its new value is non-empty — the rule is
    /// not re-run until the next submit attempt.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let value = match field {
            Field::CelularLider => phone_mask(&value),
            _ => value,
        };

        if !value.trim().is_empty() {
            self.errors.remove(field.name());
        }
        self.draft.set(field, value);

        if self.state == FormState::Empty {
            self.state = FormState::Editing;
        }
    }

    /// Store a time picked from a time-selection control
    pub fn set_time(&mut self, hour: u8, minute: u8) {
        self.set_field(Field::Horario, format_time(hour, minute));
    }

    /// Store both coordinates from a device-location result
    pub fn set_location(&mut self, lat: f64, lng: f64) {
        self.set_field(Field::Lat, lat.to_string());
        self.set_field(Field::Lng, lng.to_string());
    }

    // ==================== Photo upload ====================

    /// Upload a selected photo through the gateway and store its public URL
    ///
    /// Failure aborts only the photo step; the user may retry by
    /// re-selecting. Submit stays disabled while the upload is in flight.
    pub async fn attach_photo<G>(&mut self, gateway: &G, data: Vec<u8>, extension: &str) -> UploadOutcome
    where
        G: SubmissionGateway + ?Sized,
    {
        self.photo_uploading = true;
        debug!(size = data.len(), extension, "uploading célula photo");

        let result = gateway.upload_photo(data, extension).await;
        self.photo_uploading = false;

        match result {
            Ok(url) => {
                self.set_field(Field::Photo, url.clone());
                UploadOutcome::Uploaded(url)
            }
            Err(err) => {
                warn!(error = %err, "photo upload failed");
                UploadOutcome::Failed(err.message)
            }
        }
    }

    // ==================== Submission ====================

    /// Validate the full draft and, if valid, persist it through the gateway
    ///
    /// On validation failure the error state is populated and no network
    /// call is made. On persistence failure all values are retained for
    /// correction and resubmission; there is no automatic retry.
    pub async fn submit<G>(&mut self, gateway: &G) -> SubmitOutcome
    where
        G: SubmissionGateway + ?Sized,
    {
        if !self.submit_enabled() {
            return SubmitOutcome::Blocked;
        }

        let record = match self.schema.validate(&self.draft) {
            Ok(record) => record,
            Err(errors) => {
                warn!(invalid_fields = errors.len(), "célula form validation failed");
                self.errors = errors;
                self.state = FormState::Editing;
                return SubmitOutcome::Invalid;
            }
        };

        self.state = FormState::Submitting;
        match gateway.insert_celula(&record).await {
            Ok(()) => {
                info!(nome_celula = %record.nome_celula, "célula registered");
                self.reset();
                SubmitOutcome::Submitted
            }
            Err(err) => {
                warn!(error = %err, "célula insert failed");
                self.state = FormState::Editing;
                SubmitOutcome::Failed(err.message)
            }
        }
    }

    /// Clear all values and errors after a successful submission
    fn reset(&mut self) {
        self.draft = CelulaDraft::default();
        self.errors.clear();
        self.state = FormState::Empty;
        self.photo_uploading = false;
    }
}
