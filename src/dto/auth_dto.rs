use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::dto::quote_dto::{non_empty, validate_email_domain, validate_full_name};
use crate::form::{FieldErrors, FormState};

pub const AUTH_FIELDS: [&str; 6] = [
    "fullName",
    "company",
    "phone",
    "email",
    "password",
    "confirmPassword",
];

const PASSWORD_TOO_SHORT: &str = "Le mot de passe doit contenir au moins 6 caractères";
const PASSWORD_MISMATCH: &str = "Les mots de passe ne correspondent pas";

/// Values of the auth page; sign-in only reads `email` and `password`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthFormValues {
    pub full_name: String,
    pub company: String,
    pub phone: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignInCredentials {
    pub email: String,
    pub password: String,
}

/// Everything the hosted service needs to create an account.
#[derive(Debug, Clone, PartialEq)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    /// Where the confirmation e-mail sends the user back to
    pub redirect_to: String,
}

#[derive(Debug, Validate)]
struct SignInCandidate {
    #[validate(email(message = "Email invalide"), custom(function = "validate_email_domain"))]
    email: String,
    #[validate(custom(function = "validate_password"))]
    password: String,
}

#[derive(Debug, Validate)]
struct SignUpCandidate {
    #[validate(custom(function = "validate_full_name"))]
    full_name: String,
    #[validate(email(message = "Email invalide"), custom(function = "validate_email_domain"))]
    email: String,
    #[validate(custom(function = "validate_password"))]
    password: String,
}

fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < 6 {
        return Err(ValidationError::new("too_short").with_message(Cow::Borrowed(PASSWORD_TOO_SHORT)));
    }
    Ok(())
}

impl AuthFormValues {
    pub fn from_form(form: &FormState) -> Self {
        AuthFormValues {
            full_name: form.value("fullName").to_string(),
            company: form.value("company").to_string(),
            phone: form.value("phone").to_string(),
            email: form.value("email").to_string(),
            password: form.value("password").to_string(),
            confirm_password: form.value("confirmPassword").to_string(),
        }
    }

    pub fn apply_to(&self, form: &mut FormState) {
        form.set("fullName", self.full_name.as_str());
        form.set("company", self.company.as_str());
        form.set("phone", self.phone.as_str());
        form.set("email", self.email.as_str());
        form.set("password", self.password.as_str());
        form.set("confirmPassword", self.confirm_password.as_str());
    }

    pub fn validate_sign_in(&self) -> Result<SignInCredentials, FieldErrors> {
        let candidate = SignInCandidate {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        candidate.validate().map_err(FieldErrors::from)?;
        Ok(SignInCredentials {
            email: candidate.email,
            password: candidate.password,
        })
    }

    /// Field constraints first; the confirmation is only compared once they
    /// all pass.
    pub fn validate_sign_up(&self, redirect_to: &str) -> Result<SignUpRequest, FieldErrors> {
        let candidate = SignUpCandidate {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        candidate.validate().map_err(FieldErrors::from)?;

        if self.password != self.confirm_password {
            let mut errors = FieldErrors::new();
            errors.insert("confirmPassword", PASSWORD_MISMATCH);
            return Err(errors);
        }

        Ok(SignUpRequest {
            email: candidate.email,
            password: candidate.password,
            full_name: candidate.full_name,
            company: non_empty(&self.company),
            phone: non_empty(&self.phone),
            redirect_to: redirect_to.to_string(),
        })
    }
}
