//! PHI category definitions
//!
//! The category set is closed: adding or removing a category is a
//! compile-time change that the generator dispatch table and the default
//! pattern library both have to follow.

use serde::{Deserialize, Serialize};

/// PHI category covered by the default Dutch placeholder set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhiCategory {
    /// Person names (first, last, full, with initials)
    PersonName,
    /// Bare initials such as "A.B."
    PersonInitials,
    /// Calendar dates
    Date,
    /// Clock times, numeric or natural language
    Time,
    /// Telephone numbers
    PhoneNumber,
    /// Street addresses
    Address,
    /// Patient identifiers
    PatientId,
    /// Z-numbers
    ZNumber,
    /// Cities and other place names
    Location,
    /// Document / report identifiers
    DocumentId,
    /// Report sub-identifiers carrying a subtype token
    DocumentSubId,
    /// Generic PHI numbers
    PhiNumber,
    /// Ages in years
    Age,
    /// Hospital and clinic names
    HospitalName,
    /// Accreditation numbers
    AccreditationNumber,
    /// Study / trial names
    StudyName,
}

impl PhiCategory {
    /// All categories in declaration order.
    ///
    /// Registry ordering and alternation precedence follow this order, so
    /// it must stay stable.
    pub const ALL: [PhiCategory; 16] = [
        Self::PersonName,
        Self::PersonInitials,
        Self::Date,
        Self::Time,
        Self::PhoneNumber,
        Self::Address,
        Self::PatientId,
        Self::ZNumber,
        Self::Location,
        Self::DocumentId,
        Self::DocumentSubId,
        Self::PhiNumber,
        Self::Age,
        Self::HospitalName,
        Self::AccreditationNumber,
        Self::StudyName,
    ];

    /// Get the snake_case label for the category
    ///
    /// Used in mapping records, audit logs, and as the key in
    /// configuration files and the embedded pattern library.
    pub fn label(&self) -> &'static str {
        match self {
            Self::PersonName => "person_name",
            Self::PersonInitials => "person_initials",
            Self::Date => "date",
            Self::Time => "time",
            Self::PhoneNumber => "phone_number",
            Self::Address => "address",
            Self::PatientId => "patient_id",
            Self::ZNumber => "z_number",
            Self::Location => "location",
            Self::DocumentId => "document_id",
            Self::DocumentSubId => "document_sub_id",
            Self::PhiNumber => "phi_number",
            Self::Age => "age",
            Self::HospitalName => "hospital_name",
            Self::AccreditationNumber => "accreditation_number",
            Self::StudyName => "study_name",
        }
    }

    /// Parse a configuration key into a category
    pub fn from_config_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.label() == key)
    }
}

impl std::fmt::Display for PhiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
