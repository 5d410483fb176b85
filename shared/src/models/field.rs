//! Form field identifiers and fixed selection sets

use serde::{Deserialize, Serialize};

// ============================================================================
// Field
// ============================================================================

/// The twelve fields of the registration form
///
/// `name()` returns the wire/database column name; `label()` and
/// `required_message()` return the user-facing Portuguese strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    NomeCelula,
    NomeLider,
    CelularLider,
    Bairro,
    Rede,
    Discipulado,
    PublicoAlvo,
    DiaDaSemana,
    Horario,
    Lat,
    Lng,
    Photo,
}

impl Field {
    /// All form fields, in form order
    pub const ALL: [Field; 12] = [
        Field::NomeCelula,
        Field::NomeLider,
        Field::CelularLider,
        Field::Bairro,
        Field::Rede,
        Field::Discipulado,
        Field::PublicoAlvo,
        Field::DiaDaSemana,
        Field::Horario,
        Field::Lat,
        Field::Lng,
        Field::Photo,
    ];

    /// Wire/database column name
    pub const fn name(&self) -> &'static str {
        match self {
            Field::NomeCelula => "nome_celula",
            Field::NomeLider => "nome_lider",
            Field::CelularLider => "celular_lider",
            Field::Bairro => "bairro",
            Field::Rede => "rede",
            Field::Discipulado => "discipulado",
            Field::PublicoAlvo => "publico_alvo",
            Field::DiaDaSemana => "dia_da_semana",
            Field::Horario => "horario",
            Field::Lat => "lat",
            Field::Lng => "lng",
            Field::Photo => "photo",
        }
    }

    /// User-facing field label (Portuguese)
    pub const fn label(&self) -> &'static str {
        match self {
            Field::NomeCelula => "Nome da célula",
            Field::NomeLider => "Nome do líder",
            Field::CelularLider => "Celular do líder",
            Field::Bairro => "Bairro",
            Field::Rede => "Rede",
            Field::Discipulado => "Discipulado",
            Field::PublicoAlvo => "Público alvo",
            Field::DiaDaSemana => "Dia da semana",
            Field::Horario => "Horário",
            Field::Lat => "Latitude",
            Field::Lng => "Longitude",
            Field::Photo => "Foto",
        }
    }

    /// Message shown when the field is empty after trimming
    ///
    /// Kept as per-field strings because of grammatical gender
    /// ("obrigatório" vs "obrigatória").
    pub const fn required_message(&self) -> &'static str {
        match self {
            Field::NomeCelula => "Nome da célula é obrigatório",
            Field::NomeLider => "Nome do líder é obrigatório",
            Field::CelularLider => "Celular do líder é obrigatório",
            Field::Bairro => "Bairro é obrigatório",
            Field::Rede => "Rede é obrigatória",
            Field::Discipulado => "Discipulado é obrigatório",
            Field::PublicoAlvo => "Público alvo é obrigatório",
            Field::DiaDaSemana => "Dia da semana é obrigatório",
            Field::Horario => "Horário é obrigatório",
            Field::Lat => "Latitude é obrigatória",
            Field::Lng => "Longitude é obrigatória",
            Field::Photo => "Foto é obrigatória",
        }
    }
}

// ============================================================================
// Fixed selection sets
// ============================================================================

/// Target audience of a célula (fixed product list)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PublicoAlvo {
    Adultos,
    Jovens,
    Adolescentes,
    Juvenis,
    Kids,
}

impl PublicoAlvo {
    pub const ALL: [PublicoAlvo; 5] = [
        PublicoAlvo::Adultos,
        PublicoAlvo::Jovens,
        PublicoAlvo::Adolescentes,
        PublicoAlvo::Juvenis,
        PublicoAlvo::Kids,
    ];

    /// Wire string, identical to the selection option shown to the user
    pub const fn as_str(&self) -> &'static str {
        match self {
            PublicoAlvo::Adultos => "Adultos",
            PublicoAlvo::Jovens => "Jovens",
            PublicoAlvo::Adolescentes => "Adolescentes",
            PublicoAlvo::Juvenis => "Juvenis",
            PublicoAlvo::Kids => "Kids",
        }
    }

    /// Exact, case-sensitive match against the wire string
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Weekday on which a célula meets (no Sunday — services day)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum DiaDaSemana {
    #[serde(rename = "Segunda-feira")]
    Segunda,
    #[serde(rename = "Terça-feira")]
    Terca,
    #[serde(rename = "Quarta-feira")]
    Quarta,
    #[serde(rename = "Quinta-feira")]
    Quinta,
    #[serde(rename = "Sexta-feira")]
    Sexta,
    #[serde(rename = "Sábado")]
    Sabado,
}

impl DiaDaSemana {
    pub const ALL: [DiaDaSemana; 6] = [
        DiaDaSemana::Segunda,
        DiaDaSemana::Terca,
        DiaDaSemana::Quarta,
        DiaDaSemana::Quinta,
        DiaDaSemana::Sexta,
        DiaDaSemana::Sabado,
    ];

    /// Wire string, identical to the selection option shown to the user
    pub const fn as_str(&self) -> &'static str {
        match self {
            DiaDaSemana::Segunda => "Segunda-feira",
            DiaDaSemana::Terca => "Terça-feira",
            DiaDaSemana::Quarta => "Quarta-feira",
            DiaDaSemana::Quinta => "Quinta-feira",
            DiaDaSemana::Sexta => "Sexta-feira",
            DiaDaSemana::Sabado => "Sábado",
        }
    }

    /// Exact, case-sensitive match against the wire string
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.as_str() == value)
    }
}
