//! Configured option catalog for the enumerated form fields
//!
//! The neighborhood, network, and discipleship lists come from an external
//! configuration collaborator. They are passed in explicitly at construction
//! time rather than read from module-level constants, so each deployment
//! (church) can carry its own catalog.

/// Option lists for the enumerated form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormOptions {
    bairros: Vec<String>,
    redes: Vec<String>,
    discipulados: Vec<String>,
}

impl FormOptions {
    /// Build a catalog from the three configured lists
    pub fn new<I, S>(bairros: I, redes: I, discipulados: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bairros: bairros.into_iter().map(Into::into).collect(),
            redes: redes.into_iter().map(Into::into).collect(),
            discipulados: discipulados.into_iter().map(Into::into).collect(),
        }
    }

    pub fn bairros(&self) -> &[String] {
        &self.bairros
    }

    pub fn redes(&self) -> &[String] {
        &self.redes
    }

    pub fn discipulados(&self) -> &[String] {
        &self.discipulados
    }

    /// Exact, case-sensitive membership checks (no normalization)
    pub fn has_bairro(&self, value: &str) -> bool {
        self.bairros.iter().any(|v| v == value)
    }

    pub fn has_rede(&self, value: &str) -> bool {
        self.redes.iter().any(|v| v == value)
    }

    pub fn has_discipulado(&self, value: &str) -> bool {
        self.discipulados.iter().any(|v| v == value)
    }
}
