//! Declarative validation schema
//!
//! Each field carries an ordered rule list; validation reports the first
//! failing rule per field and never aggregates multiple messages for one
//! field. On success the draft is trimmed and coerced into a
//! [`CelulaRecord`]. Fields are independent — no cross-field rules exist.

use crate::mask::{is_valid_time, phone_digits};
use shared::{CelulaDraft, CelulaRecord, DiaDaSemana, Field, FormOptions, PublicoAlvo};
use std::collections::BTreeMap;
use url::Url;

/// Field name → first violated rule's message, one entry per invalid field
pub type FieldErrors = BTreeMap<&'static str, String>;

/// One constraint on a single field
#[derive(Debug, Clone, Copy, PartialEq)]
enum Rule {
    /// Trimmed character count within inclusive bounds
    Length { min: usize, max: usize },
    /// Digit count after stripping non-digits within inclusive bounds
    Phone { min: usize, max: usize },
    /// Strict 24-hour `HH:MM`
    Time,
    /// Member of the selection set for this field (configured list or fixed
    /// enum), exact and case-sensitive
    Selection,
    /// Parses to a finite decimal within inclusive bounds
    Range { min: f64, max: f64 },
    /// Syntactically valid absolute URL (no reachability check)
    Url,
}

/// Per-field rule lists, evaluated in declaration order
///
/// Every field is implicitly required (non-empty after trim) before its
/// rules run.
const fn rules(field: Field) -> &'static [Rule] {
    match field {
        Field::NomeCelula => &[Rule::Length { min: 3, max: 100 }],
        Field::NomeLider => &[Rule::Length { min: 2, max: 100 }],
        Field::CelularLider => &[Rule::Phone { min: 10, max: 11 }],
        Field::Bairro | Field::Rede | Field::Discipulado => {
            &[Rule::Length { min: 1, max: 50 }, Rule::Selection]
        }
        Field::PublicoAlvo | Field::DiaDaSemana => &[Rule::Selection],
        Field::Horario => &[Rule::Time],
        Field::Lat => &[Rule::Range { min: -90.0, max: 90.0 }],
        Field::Lng => &[Rule::Range { min: -180.0, max: 180.0 }],
        Field::Photo => &[Rule::Url],
    }
}

/// The registration form schema
///
/// Holds the configured option catalog; everything else about the rules is
/// static. One schema instance can validate any number of drafts.
#[derive(Debug, Clone)]
pub struct FormSchema {
    options: FormOptions,
}

impl FormSchema {
    /// Create a schema bound to a configured option catalog
    pub fn new(options: FormOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormOptions {
        &self.options
    }

    /// Validate the full draft
    ///
    /// Returns the trimmed, coerced record when every field passes, or the
    /// field → message map (no entries for valid fields) otherwise.
    pub fn validate(&self, draft: &CelulaDraft) -> Result<CelulaRecord, FieldErrors> {
        let mut errors = FieldErrors::new();

        for field in Field::ALL {
            if let Err(message) = self.check_field(field, draft.get(field)) {
                errors.insert(field.name(), message);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        self.coerce(draft)
    }

    /// Run one field's rules against a raw value
    pub fn check_field(&self, field: Field, raw: &str) -> Result<(), String> {
        let value = raw.trim();
        if value.is_empty() {
            return Err(field.required_message().to_string());
        }

        for rule in rules(field) {
            self.check_rule(field, *rule, value)?;
        }
        Ok(())
    }

    fn check_rule(&self, field: Field, rule: Rule, value: &str) -> Result<(), String> {
        match rule {
            Rule::Length { min, max } => {
                let len = value.chars().count();
                if len < min {
                    Err(format!(
                        "{} deve ter pelo menos {min} caracteres",
                        field.label()
                    ))
                } else if len > max {
                    Err(format!(
                        "{} deve ter no máximo {max} caracteres",
                        field.label()
                    ))
                } else {
                    Ok(())
                }
            }
            Rule::Phone { min, max } => {
                let digits = phone_digits(value).len();
                if digits < min || digits > max {
                    Err(format!(
                        "Telefone deve ter entre {min} e {max} dígitos"
                    ))
                } else {
                    Ok(())
                }
            }
            Rule::Time => {
                if is_valid_time(value) {
                    Ok(())
                } else {
                    Err("Horário deve estar no formato HH:MM".to_string())
                }
            }
            Rule::Selection => {
                if self.selection_contains(field, value) {
                    Ok(())
                } else {
                    Err(format!(
                        "{} deve ser uma das opções disponíveis",
                        field.label()
                    ))
                }
            }
            Rule::Range { min, max } => match value.parse::<f64>() {
                Ok(number) if number.is_finite() && number >= min && number <= max => Ok(()),
                _ => Err(format!(
                    "{} deve ser um número entre {min} e {max}",
                    field.label()
                )),
            },
            Rule::Url => {
                if Url::parse(value).is_ok() {
                    Ok(())
                } else {
                    Err("URL da foto deve ser válida".to_string())
                }
            }
        }
    }

    /// Membership check behind [`Rule::Selection`]
    fn selection_contains(&self, field: Field, value: &str) -> bool {
        match field {
            Field::Bairro => self.options.has_bairro(value),
            Field::Rede => self.options.has_rede(value),
            Field::Discipulado => self.options.has_discipulado(value),
            Field::PublicoAlvo => PublicoAlvo::parse(value).is_some(),
            Field::DiaDaSemana => DiaDaSemana::parse(value).is_some(),
            _ => false,
        }
    }

    /// Build the typed record from a draft whose fields all passed
    ///
    /// Parse failures here are unreachable after [`Self::check_field`], but
    /// they map back into the same error shape instead of panicking.
    fn coerce(&self, draft: &CelulaDraft) -> Result<CelulaRecord, FieldErrors> {
        let celular_lider = phone_digits(&draft.celular_lider)
            .parse::<u64>()
            .map_err(|_| single_error(Field::CelularLider))?;
        let publico_alvo = PublicoAlvo::parse(draft.publico_alvo.trim())
            .ok_or_else(|| single_error(Field::PublicoAlvo))?;
        let dia_da_semana = DiaDaSemana::parse(draft.dia_da_semana.trim())
            .ok_or_else(|| single_error(Field::DiaDaSemana))?;
        let lat = draft
            .lat
            .trim()
            .parse::<f64>()
            .map_err(|_| single_error(Field::Lat))?;
        let lng = draft
            .lng
            .trim()
            .parse::<f64>()
            .map_err(|_| single_error(Field::Lng))?;

        Ok(CelulaRecord {
            nome_celula: draft.nome_celula.trim().to_string(),
            nome_lider: draft.nome_lider.trim().to_string(),
            celular_lider,
            bairro: draft.bairro.trim().to_string(),
            rede: draft.rede.trim().to_string(),
            discipulado: draft.discipulado.trim().to_string(),
            publico_alvo,
            dia_da_semana,
            horario: draft.horario.trim().to_string(),
            lat,
            lng,
            photo: draft.photo.trim().to_string(),
        })
    }
}

fn single_error(field: Field) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field.name(), format!("{} inválido", field.label()));
    errors
}
