//! [`SubmissionGateway`] implementation over the HTTP client
//!
//! Client errors are translated into the shared error taxonomy at this
//! boundary: insert failures land in the persistence category, upload
//! failures in the upload category, both carrying the backend's raw
//! message.

use async_trait::async_trait;
use celula_form::SubmissionGateway;
use shared::{AppError, AppResult, CelulaRecord, ErrorCode};

use crate::{CelulaClient, ClientError};

#[async_trait]
impl SubmissionGateway for CelulaClient {
    async fn insert_celula(&self, record: &CelulaRecord) -> AppResult<()> {
        self.insert(record).await.map_err(insert_error)
    }

    async fn upload_photo(&self, data: Vec<u8>, extension: &str) -> AppResult<String> {
        self.upload(data, extension).await.map_err(upload_error)
    }
}

fn insert_error(err: ClientError) -> AppError {
    match &err {
        ClientError::Http(http) if http.is_connect() || http.is_timeout() => {
            AppError::with_message(ErrorCode::PersistenceUnavailable, err.raw_message())
        }
        ClientError::Unauthorized => AppError::new(ErrorCode::PersistenceUnauthorized),
        _ => AppError::persistence(err.raw_message()),
    }
}

fn upload_error(err: ClientError) -> AppError {
    AppError::upload(err.raw_message())
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCategory;

    #[test]
    fn test_insert_error_category() {
        let err = insert_error(ClientError::Internal("duplicate key".to_string()));
        assert_eq!(err.code.category(), ErrorCategory::Persistence);
        assert_eq!(err.message, "duplicate key");

        let err = insert_error(ClientError::Unauthorized);
        assert_eq!(err.code, ErrorCode::PersistenceUnauthorized);
    }

    #[test]
    fn test_upload_error_category() {
        let err = upload_error(ClientError::Validation("Empty file".to_string()));
        assert_eq!(err.code.category(), ErrorCategory::Upload);
        assert_eq!(err.message, "Empty file");
    }
}
