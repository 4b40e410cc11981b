use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::form::{FieldErrors, FormState};
use crate::model::quote_request::{ProductType, QuoteRequest};

pub const QUOTE_FIELDS: [&str; 7] = [
    "fullName",
    "email",
    "company",
    "phone",
    "productType",
    "quantity",
    "message",
];

/// Raw quote form values, as typed. Every field is a string and may be empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteFormValues {
    pub full_name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub product_type: String,
    pub quantity: String,
    pub message: String,
}

impl QuoteFormValues {
    pub fn from_form(form: &FormState) -> Self {
        QuoteFormValues {
            full_name: form.value("fullName").to_string(),
            email: form.value("email").to_string(),
            company: form.value("company").to_string(),
            phone: form.value("phone").to_string(),
            product_type: form.value("productType").to_string(),
            quantity: form.value("quantity").to_string(),
            message: form.value("message").to_string(),
        }
    }

    /// Replays the values as input events on `form`.
    pub fn apply_to(&self, form: &mut FormState) {
        form.set("fullName", self.full_name.as_str());
        form.set("email", self.email.as_str());
        form.set("company", self.company.as_str());
        form.set("phone", self.phone.as_str());
        form.set("productType", self.product_type.as_str());
        form.set("quantity", self.quantity.as_str());
        form.set("message", self.message.as_str());
    }

    /// Runs every constraint. Either the whole record is valid or the full
    /// error set comes back; nothing here touches the network.
    pub fn validate_quote(&self) -> Result<ValidatedQuote, FieldErrors> {
        let candidate = QuoteCandidate {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            company: non_empty(&self.company),
            phone: non_empty(&self.phone),
            product_type: self.product_type.trim().to_string(),
            quantity: non_empty(&self.quantity),
            message: self.message.trim().to_string(),
        };

        candidate.validate().map_err(FieldErrors::from)?;

        // Both parses were checked by the validators above.
        let product_type = candidate
            .product_type
            .parse::<ProductType>()
            .map_err(|_| single_error("productType", UNKNOWN_PRODUCT_TYPE))?;
        let quantity = match candidate.quantity.as_deref() {
            Some(q) => Some(parse_quantity(q).ok_or_else(|| single_error("quantity", INVALID_QUANTITY))?),
            None => None,
        };

        Ok(ValidatedQuote {
            full_name: candidate.full_name,
            email: candidate.email,
            company: candidate.company,
            phone: candidate.phone,
            product_type,
            quantity,
            message: candidate.message,
        })
    }
}

/// A quote that passed validation; the only input a `QuoteRequest` is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedQuote {
    pub full_name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
    pub product_type: ProductType,
    pub quantity: Option<i32>,
    pub message: String,
}

impl ValidatedQuote {
    pub fn into_record(self, user_id: Option<Uuid>) -> QuoteRequest {
        QuoteRequest {
            user_id,
            subject: QuoteRequest::subject_for(self.product_type),
            full_name: self.full_name,
            email: self.email,
            company: self.company,
            phone: self.phone,
            message: self.message,
            product_type: self.product_type,
            quantity: self.quantity,
        }
    }
}

const INVALID_EMAIL: &str = "Email invalide";
const NAME_TOO_SHORT: &str = "Le nom doit contenir au moins 2 caractères";
const NAME_TOO_LONG: &str = "Le nom ne peut pas dépasser 100 caractères";
const MISSING_PRODUCT_TYPE: &str = "Sélectionnez un type de produit";
const UNKNOWN_PRODUCT_TYPE: &str = "Type de produit inconnu";
const INVALID_QUANTITY: &str = "La quantité doit être un nombre entier positif";
const MESSAGE_TOO_SHORT: &str = "Le message doit contenir au moins 10 caractères";
const MESSAGE_TOO_LONG: &str = "Le message ne peut pas dépasser 2000 caractères";

#[derive(Debug, Validate)]
struct QuoteCandidate {
    #[validate(custom(function = "validate_full_name"))]
    full_name: String,

    #[validate(
        email(message = "Email invalide"),
        custom(function = "validate_email_domain"),
        length(max = 255, message = "L'email ne peut pas dépasser 255 caractères")
    )]
    email: String,

    #[validate(length(max = 100, message = "Le nom de l'entreprise ne peut pas dépasser 100 caractères"))]
    company: Option<String>,

    #[validate(length(max = 20, message = "Le téléphone ne peut pas dépasser 20 caractères"))]
    phone: Option<String>,

    #[validate(custom(function = "validate_product_type"))]
    product_type: String,

    #[validate(custom(function = "validate_quantity"))]
    quantity: Option<String>,

    #[validate(custom(function = "validate_message"))]
    message: String,
}

fn failure(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Borrowed(message))
}

fn single_error(field: &str, message: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    errors.insert(field, message);
    errors
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

pub(crate) fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    match char_len(value) {
        n if n < 2 => Err(failure("too_short", NAME_TOO_SHORT)),
        n if n > 100 => Err(failure("too_long", NAME_TOO_LONG)),
        _ => Ok(()),
    }
}

/// The `email` rule accepts bare hosts such as `jean@localhost`; a
/// deliverable address needs a dotted domain ending in a 2+ letter TLD.
pub(crate) fn validate_email_domain(value: &str) -> Result<(), ValidationError> {
    let domain = value.rsplit_once('@').map(|(_, domain)| domain).unwrap_or_default();
    match domain.rsplit_once('.') {
        Some((host, tld))
            if !host.is_empty()
                && !host.ends_with('.')
                && tld.len() >= 2
                && tld.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            Ok(())
        }
        _ => Err(failure("email", INVALID_EMAIL)),
    }
}

fn validate_product_type(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(failure("required", MISSING_PRODUCT_TYPE));
    }
    value
        .parse::<ProductType>()
        .map(|_| ())
        .map_err(|_| failure("unknown_product_type", UNKNOWN_PRODUCT_TYPE))
}

/// Positive integers that fit the `quantity` column: "0", "-3", "abc" and
/// anything above `i32::MAX` are all rejected.
pub fn parse_quantity(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok().filter(|q| *q > 0)
}

fn validate_quantity(value: &str) -> Result<(), ValidationError> {
    parse_quantity(value)
        .map(|_| ())
        .ok_or_else(|| failure("not_positive_integer", INVALID_QUANTITY))
}

fn validate_message(value: &str) -> Result<(), ValidationError> {
    match char_len(value) {
        n if n < 10 => Err(failure("too_short", MESSAGE_TOO_SHORT)),
        n if n > 2000 => Err(failure("too_long", MESSAGE_TOO_LONG)),
        _ => Ok(()),
    }
}
