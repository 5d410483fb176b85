//! Domain models for célula registration

mod celula;
mod field;

pub use celula::{CelulaDraft, CelulaRecord};
pub use field::{DiaDaSemana, Field, PublicoAlvo};
