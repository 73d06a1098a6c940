use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Unknown
    }
}

/// Coarse age bracket derived from the date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "Underage")]
    Underage,
    #[serde(rename = "20-30")]
    TwentyToThirty,
    #[serde(rename = "30-50")]
    ThirtyToFifty,
    #[serde(rename = "Senior")]
    Senior,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl AgeBand {
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeBand::Underage => "Underage",
            AgeBand::TwentyToThirty => "20-30",
            AgeBand::ThirtyToFifty => "30-50",
            AgeBand::Senior => "Senior",
            AgeBand::NotAvailable => "N/A",
        }
    }
}

/// Fields read off both sides of the card. Missing values are empty strings.
/// Identifiers are kept in display form (`nnnn nnnn nnnn`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFields {
    pub name: String,
    pub dob: String,
    pub gender: Gender,
    pub identifier_front: String,
    pub identifier_back: String,
    pub address: String,
    pub pincode: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationScore {
    pub score: f32,
    pub admitted: bool,
    /// Names of the rules that contributed to the score
    pub fired: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciliationResult {
    /// Bare 12 digits; `None` when neither side yielded an identifier
    pub canonical_identifier: Option<String>,
    pub matched: bool,
}

/// Final record handed to the caller. Field names are part of the client contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub name: String,
    pub dob: String,
    pub gender: Gender,
    pub uid: String,
    pub address: String,
    pub pincode: String,
    pub age_band: AgeBand,
    #[serde(rename = "isUidSame")]
    pub is_uid_same: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Dob,
    Gender,
    IdentifierFront,
    IdentifierBack,
    Address,
}

/// Which extraction strategy produced each field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractionReport {
    hits: Vec<(Field, &'static str)>,
}

impl ExtractionReport {
    pub fn record(&mut self, field: Field, strategy: &'static str) {
        self.hits.push((field, strategy));
    }

    pub fn strategy_for(&self, field: Field) -> Option<&'static str> {
        self.hits
            .iter()
            .find(|(hit, _)| *hit == field)
            .map(|(_, strategy)| *strategy)
    }

    pub fn hits(&self) -> &[(Field, &'static str)] {
        &self.hits
    }
}
