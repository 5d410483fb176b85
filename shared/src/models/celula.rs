//! Célula record model

use super::field::{DiaDaSemana, Field, PublicoAlvo};
use serde::{Deserialize, Serialize};

/// In-progress registration form values
///
/// Raw, untrimmed strings exactly as entered (or as produced by the field
/// formatter). Owned exclusively by one form controller instance; never
/// persisted locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CelulaDraft {
    pub nome_celula: String,
    pub nome_lider: String,
    pub celular_lider: String,
    pub bairro: String,
    pub rede: String,
    pub discipulado: String,
    pub publico_alvo: String,
    pub dia_da_semana: String,
    pub horario: String,
    pub lat: String,
    pub lng: String,
    pub photo: String,
}

impl CelulaDraft {
    /// Get the raw value of a field
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::NomeCelula => &self.nome_celula,
            Field::NomeLider => &self.nome_lider,
            Field::CelularLider => &self.celular_lider,
            Field::Bairro => &self.bairro,
            Field::Rede => &self.rede,
            Field::Discipulado => &self.discipulado,
            Field::PublicoAlvo => &self.publico_alvo,
            Field::DiaDaSemana => &self.dia_da_semana,
            Field::Horario => &self.horario,
            Field::Lat => &self.lat,
            Field::Lng => &self.lng,
            Field::Photo => &self.photo,
        }
    }

    /// Set the raw value of a field
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::NomeCelula => &mut self.nome_celula,
            Field::NomeLider => &mut self.nome_lider,
            Field::CelularLider => &mut self.celular_lider,
            Field::Bairro => &mut self.bairro,
            Field::Rede => &mut self.rede,
            Field::Discipulado => &mut self.discipulado,
            Field::PublicoAlvo => &mut self.publico_alvo,
            Field::DiaDaSemana => &mut self.dia_da_semana,
            Field::Horario => &mut self.horario,
            Field::Lat => &mut self.lat,
            Field::Lng => &mut self.lng,
            Field::Photo => &mut self.photo,
        };
        *slot = value;
    }

    /// True when every field is empty (the initial form state)
    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Validated, type-coerced célula record
///
/// Serializes to the persistence collection's wire shape: strings for text
/// fields, numbers for `celular_lider`, `lat`, and `lng`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CelulaRecord {
    pub nome_celula: String,
    pub nome_lider: String,
    /// Digits-only phone number (10–11 digits)
    pub celular_lider: u64,
    pub bairro: String,
    pub rede: String,
    pub discipulado: String,
    pub publico_alvo: PublicoAlvo,
    pub dia_da_semana: DiaDaSemana,
    /// Zero-padded 24-hour `HH:MM`
    pub horario: String,
    pub lat: f64,
    pub lng: f64,
    /// Publicly resolvable photo URL
    pub photo: String,
}
