//! Non-interactive registration example
//!
//! Drives the full flow against a real backend: fill the form through the
//! controller, validate, and submit.
//!
//! Run: SUPABASE_URL=... SUPABASE_ANON_KEY=... cargo run --example register

use celula_client::{CelulaClient, ClientConfig};
use celula_form::{FormController, FormSchema, SubmitOutcome};
use shared::{Field, FormOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let base_url = std::env::var("SUPABASE_URL")?;
    let api_key = std::env::var("SUPABASE_ANON_KEY")?;

    let client = CelulaClient::new(ClientConfig::new(base_url, api_key))?;

    // Option catalog normally supplied by the deployment's configuration.
    let options = FormOptions::new(
        vec!["Centro", "Cristo Rei", "Jardim Glória"],
        vec!["Rede Leste", "Rede Oeste"],
        vec!["Discipulado 1", "Discipulado 2"],
    );

    let mut form = FormController::new(FormSchema::new(options));
    form.set_field(Field::NomeCelula, "Célula Vida Nova");
    form.set_field(Field::NomeLider, "João Silva");
    form.set_field(Field::CelularLider, "65996128425");
    form.set_field(Field::Bairro, "Centro");
    form.set_field(Field::Rede, "Rede Leste");
    form.set_field(Field::Discipulado, "Discipulado 1");
    form.set_field(Field::PublicoAlvo, "Jovens");
    form.set_field(Field::DiaDaSemana, "Quarta-feira");
    form.set_time(19, 30);
    form.set_location(-15.601481, -56.097889);
    form.set_field(
        Field::Photo,
        "https://storage.example.com/lideres/celula_demo.jpg",
    );

    let outcome = form.submit(&client).await;
    let notice = outcome.notice();
    println!("{}", notice.message);

    if let SubmitOutcome::Invalid = outcome {
        for (field, message) in form.errors() {
            println!("  {field}: {message}");
        }
    }

    Ok(())
}
