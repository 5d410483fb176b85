//! HTTP submission client for the célula registration core
//!
//! Implements [`celula_form::SubmissionGateway`] against a Supabase-style
//! backend: JSON inserts into the célula collection and binary photo
//! uploads into the storage bucket, with public URL derivation.

mod config;
mod error;
mod gateway;
mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::CelulaClient;
