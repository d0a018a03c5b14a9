//! Personal information collected on the first wizard step.
//!
//! Every field is checked independently so the presentation can flag each
//! offending input on its own.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

// Separators (spaces, dots, dashes, parentheses) are stripped before matching.
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{8,15}$").expect("phone pattern is a valid regex"));

/// Identity fields of the registering participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
}

/// Fields of [`PersonalInfo`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PersonalInfoField {
    Nom,
    Prenom,
    Email,
    Telephone,
}

impl PersonalInfoField {
    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalInfoField::Nom => "nom",
            PersonalInfoField::Prenom => "prenom",
            PersonalInfoField::Email => "email",
            PersonalInfoField::Telephone => "telephone",
        }
    }
}

impl fmt::Display for PersonalInfoField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validation failure scoped to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: PersonalInfoField,
    pub error: ValidationError,
}

/// All field failures of one validation pass, in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonalInfoErrors {
    errors: Vec<FieldError>,
}

impl PersonalInfoErrors {
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn fields(&self) -> Vec<PersonalInfoField> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn get(&self, field: PersonalInfoField) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field == field).map(|e| &e.error)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    fn push(&mut self, field: PersonalInfoField, error: ValidationError) {
        self.errors.push(FieldError { field, error });
    }
}

impl fmt::Display for PersonalInfoErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(|e| e.error.to_string()).collect();
        write!(f, "{}", messages.join("; "))
    }
}

impl std::error::Error for PersonalInfoErrors {}

impl PersonalInfo {
    pub fn new(
        nom: impl Into<String>,
        prenom: impl Into<String>,
        email: impl Into<String>,
        telephone: impl Into<String>,
    ) -> Self {
        Self {
            nom: nom.into(),
            prenom: prenom.into(),
            email: email.into(),
            telephone: telephone.into(),
        }
    }

    /// Validates every field, collecting one error per failing field.
    pub fn validate(&self) -> Result<(), PersonalInfoErrors> {
        let mut errors = PersonalInfoErrors::default();

        if let Err(e) = require(PersonalInfoField::Nom, &self.nom) {
            errors.push(PersonalInfoField::Nom, e);
        }
        if let Err(e) = require(PersonalInfoField::Prenom, &self.prenom) {
            errors.push(PersonalInfoField::Prenom, e);
        }
        if let Err(e) = validate_email(&self.email) {
            errors.push(PersonalInfoField::Email, e);
        }
        if let Err(e) = validate_phone(&self.telephone) {
            errors.push(PersonalInfoField::Telephone, e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn require(field: PersonalInfoField, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field.as_str()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    require(PersonalInfoField::Email, email)?;
    if !EMAIL_RE.is_match(email.trim()) {
        return Err(ValidationError::invalid_format(
            PersonalInfoField::Email.as_str(),
            "expected an address like name@example.com",
        ));
    }
    Ok(())
}

fn validate_phone(telephone: &str) -> Result<(), ValidationError> {
    require(PersonalInfoField::Telephone, telephone)?;
    let compact: String = telephone
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '(' | ')'))
        .collect();
    if !PHONE_RE.is_match(&compact) {
        return Err(ValidationError::invalid_format(
            PersonalInfoField::Telephone.as_str(),
            "expected 8 to 15 digits, optionally prefixed with +",
        ));
    }
    Ok(())
}
