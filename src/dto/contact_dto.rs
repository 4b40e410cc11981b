use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::dto::quote_dto::{non_empty, validate_email_domain};
use crate::form::FieldErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSubject {
    Devis,
    Echantillon,
    Partenariat,
    Autre,
}

impl ContactSubject {
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "devis" => Some(ContactSubject::Devis),
            "echantillon" => Some(ContactSubject::Echantillon),
            "partenariat" => Some(ContactSubject::Partenariat),
            "autre" => Some(ContactSubject::Autre),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactSubject::Devis => "Demande de devis",
            ContactSubject::Echantillon => "Demande d'échantillons",
            ContactSubject::Partenariat => "Proposition de partenariat",
            ContactSubject::Autre => "Autre",
        }
    }
}

/// Values of the plain contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub subject: ContactSubject,
    pub message: String,
}

#[derive(Debug, Validate)]
struct ContactCandidate {
    #[validate(length(min = 1, message = "Le nom est requis"))]
    name: String,
    #[validate(email(message = "Email invalide"), custom(function = "validate_email_domain"))]
    email: String,
    #[validate(custom(function = "validate_subject"))]
    subject: String,
    #[validate(length(min = 1, message = "Le message est requis"))]
    message: String,
}

fn validate_subject(value: &str) -> Result<(), ValidationError> {
    ContactSubject::from_value(value)
        .map(|_| ())
        .ok_or_else(|| ValidationError::new("subject").with_message(Cow::Borrowed("Sélectionnez un sujet")))
}

impl ContactFormValues {
    pub fn validate_contact(&self) -> Result<ContactMessage, FieldErrors> {
        let candidate = ContactCandidate {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        };
        candidate.validate().map_err(FieldErrors::from)?;

        let subject = ContactSubject::from_value(&candidate.subject).ok_or_else(|| {
            let mut errors = FieldErrors::new();
            errors.insert("subject", "Sélectionnez un sujet");
            errors
        })?;

        Ok(ContactMessage {
            name: candidate.name,
            email: candidate.email,
            company: non_empty(&self.company),
            phone: non_empty(&self.phone),
            subject,
            message: candidate.message,
        })
    }
}
