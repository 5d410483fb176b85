//! End-to-end submit flow against an in-process mock gateway

use async_trait::async_trait;
use celula_form::{
    FormController, FormSchema, FormState, NoticeKind, SubmissionGateway, SubmitOutcome,
    UploadOutcome,
};
use shared::{AppError, AppResult, CelulaRecord, Field, FormOptions};
use std::sync::Mutex;

/// Gateway double: records inserts, optionally fails on command
#[derive(Default)]
struct MockGateway {
    inserted: Mutex<Vec<CelulaRecord>>,
    insert_error: Option<String>,
    upload_error: Option<String>,
}

impl MockGateway {
    fn failing_insert(message: &str) -> Self {
        Self {
            insert_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn failing_upload(message: &str) -> Self {
        Self {
            upload_error: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn inserted(&self) -> Vec<CelulaRecord> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmissionGateway for MockGateway {
    async fn insert_celula(&self, record: &CelulaRecord) -> AppResult<()> {
        if let Some(message) = &self.insert_error {
            return Err(AppError::persistence(message.clone()));
        }
        self.inserted.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn upload_photo(&self, _data: Vec<u8>, extension: &str) -> AppResult<String> {
        if let Some(message) = &self.upload_error {
            return Err(AppError::upload(message.clone()));
        }
        Ok(format!(
            "https://storage.example.com/lideres/celula_1.{extension}"
        ))
    }
}

fn controller() -> FormController {
    FormController::new(FormSchema::new(FormOptions::new(
        vec!["Centro", "Cristo Rei"],
        vec!["Rede Leste"],
        vec!["Discipulado 1"],
    )))
}

fn fill_valid(ctl: &mut FormController) {
    ctl.set_field(Field::NomeCelula, "Célula Vida Nova");
    ctl.set_field(Field::NomeLider, "João Silva");
    ctl.set_field(Field::CelularLider, "65996128425");
    ctl.set_field(Field::Bairro, "Centro");
    ctl.set_field(Field::Rede, "Rede Leste");
    ctl.set_field(Field::Discipulado, "Discipulado 1");
    ctl.set_field(Field::PublicoAlvo, "Jovens");
    ctl.set_field(Field::DiaDaSemana, "Quarta-feira");
    ctl.set_time(19, 30);
    ctl.set_location(-15.601481, -56.097889);
    ctl.set_field(
        Field::Photo,
        "https://storage.example.com/lideres/celula_1.jpg",
    );
}

#[tokio::test]
async fn submit_valid_record_resets_form() {
    let gateway = MockGateway::default();
    let mut ctl = controller();
    fill_valid(&mut ctl);
    assert_eq!(ctl.state(), FormState::Editing);

    let outcome = ctl.submit(&gateway).await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert_eq!(outcome.notice().kind, NoticeKind::Success);
    assert_eq!(ctl.state(), FormState::Empty);
    assert!(ctl.draft().is_blank());
    assert!(ctl.errors().is_empty());

    let inserted = gateway.inserted();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].nome_celula, "Célula Vida Nova");
    assert_eq!(inserted[0].celular_lider, 65996128425);
    assert_eq!(inserted[0].horario, "19:30");
}

#[tokio::test]
async fn submit_invalid_record_skips_network() {
    let gateway = MockGateway::default();
    let mut ctl = controller();
    fill_valid(&mut ctl);
    ctl.set_field(Field::Horario, "24:00");

    let outcome = ctl.submit(&gateway).await;

    assert_eq!(outcome, SubmitOutcome::Invalid);
    assert_eq!(ctl.state(), FormState::Editing);
    assert_eq!(
        ctl.field_error(Field::Horario),
        Some("Horário deve estar no formato HH:MM")
    );
    // No network call attempted
    assert!(gateway.inserted().is_empty());
    // Values are retained for correction
    assert_eq!(ctl.draft().nome_celula, "Célula Vida Nova");
}

#[tokio::test]
async fn persistence_failure_retains_values() {
    let gateway = MockGateway::failing_insert("duplicate key value violates unique constraint");
    let mut ctl = controller();
    fill_valid(&mut ctl);

    let outcome = ctl.submit(&gateway).await;

    // Editing → Submitting → Editing, values retained, raw backend text
    // surfaced in the notice.
    assert_eq!(ctl.state(), FormState::Editing);
    match &outcome {
        SubmitOutcome::Failed(message) => {
            assert_eq!(message, "duplicate key value violates unique constraint");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
    assert!(
        outcome
            .notice()
            .message
            .contains("duplicate key value violates unique constraint")
    );
    assert_eq!(ctl.draft().nome_celula, "Célula Vida Nova");
    assert!(ctl.errors().is_empty());

    // Correcting nothing and resubmitting against a healthy gateway works.
    let healthy = MockGateway::default();
    assert_eq!(ctl.submit(&healthy).await, SubmitOutcome::Submitted);
    assert_eq!(healthy.inserted().len(), 1);
}

#[tokio::test]
async fn resubmit_after_fixing_validation_error() {
    let gateway = MockGateway::default();
    let mut ctl = controller();
    fill_valid(&mut ctl);
    ctl.set_field(Field::Lat, "91");

    assert_eq!(ctl.submit(&gateway).await, SubmitOutcome::Invalid);
    assert_eq!(
        ctl.field_error(Field::Lat),
        Some("Latitude deve ser um número entre -90 e 90")
    );

    ctl.set_field(Field::Lat, "-15.601481");
    assert_eq!(ctl.field_error(Field::Lat), None);
    assert_eq!(ctl.submit(&gateway).await, SubmitOutcome::Submitted);
}

#[tokio::test]
async fn photo_upload_fills_photo_field() {
    let gateway = MockGateway::default();
    let mut ctl = controller();

    let outcome = ctl.attach_photo(&gateway, vec![0xFF, 0xD8], "jpg").await;

    match outcome {
        UploadOutcome::Uploaded(url) => {
            assert_eq!(ctl.draft().photo, url);
            assert!(url.ends_with(".jpg"));
        }
        other => panic!("expected Uploaded, got {other:?}"),
    }
    assert!(!ctl.photo_uploading());
    assert!(ctl.submit_enabled());
}

#[tokio::test]
async fn photo_upload_failure_leaves_record_untouched() {
    let gateway = MockGateway::failing_upload("bucket unavailable");
    let mut ctl = controller();
    fill_valid(&mut ctl);
    let photo_before = ctl.draft().photo.clone();

    let outcome = ctl.attach_photo(&gateway, vec![1, 2, 3], "png").await;

    assert_eq!(outcome, UploadOutcome::Failed("bucket unavailable".to_string()));
    assert!(outcome.notice().is_some());
    // Only the photo step aborted; all fields keep their values.
    assert_eq!(ctl.draft().photo, photo_before);
    assert_eq!(ctl.draft().nome_celula, "Célula Vida Nova");
    assert!(ctl.submit_enabled());
}
