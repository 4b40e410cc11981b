use akaa_site::dto::quote_dto::{QuoteFormValues, QUOTE_FIELDS};
use akaa_site::form::field_errors::wire_name;
use akaa_site::form::{FieldErrors, FormState};

#[test]
fn test_new_form_is_empty() {
    let form = FormState::new(&QUOTE_FIELDS);
    assert_eq!(form.values().len(), 7);
    assert!(form.values().values().all(|v| v.is_empty()));
    assert!(form.errors().is_empty());
}

#[test]
fn test_editing_a_field_clears_only_its_error() {
    let mut form = FormState::new(&QUOTE_FIELDS);
    let mut errors = FieldErrors::new();
    errors.insert("email", "Email invalide");
    errors.insert("message", "Le message doit contenir au moins 10 caractères");
    form.set_errors(errors);

    assert!(form.set("email", "jean@example.com"));
    assert!(!form.errors().contains("email"));
    assert!(form.errors().contains("message"));
    assert_eq!(form.value("email"), "jean@example.com");
}

#[test]
fn test_undeclared_field_is_ignored() {
    let mut form = FormState::new(&QUOTE_FIELDS);
    assert!(!form.set("password", "hunter22"));
    assert_eq!(form.value("password"), "");
    assert!(!form.values().contains_key("password"));
}

#[test]
fn test_prefill_only_overwrites_with_content() {
    let mut form = FormState::new(&QUOTE_FIELDS);
    form.set("company", "Typed Co");
    form.prefill("company", None);
    form.prefill("company", Some("  "));
    assert_eq!(form.value("company"), "Typed Co");
    form.prefill("company", Some("Profile Co"));
    assert_eq!(form.value("company"), "Profile Co");
}

#[test]
fn test_reset_empties_everything() {
    let mut form = FormState::new(&QUOTE_FIELDS);
    let values = QuoteFormValues {
        full_name: "Jean Dupont".to_string(),
        email: "jean@example.com".to_string(),
        message: "Need 500 gift boxes".to_string(),
        ..Default::default()
    };
    values.apply_to(&mut form);
    let mut errors = FieldErrors::new();
    errors.insert("productType", "Sélectionnez un type de produit");
    form.set_errors(errors);

    form.reset();
    assert!(form.values().values().all(|v| v.is_empty()));
    assert!(form.errors().is_empty());
    assert_eq!(QuoteFormValues::from_form(&form), QuoteFormValues::default());
}

#[test]
fn test_first_error_per_field_wins() {
    let mut errors = FieldErrors::new();
    errors.insert("email", "first");
    errors.insert("email", "second");
    assert_eq!(errors.get("email"), Some("first"));

    let mut other = FieldErrors::new();
    other.insert("email", "third");
    other.insert("phone", "too long");
    errors.merge(other);
    assert_eq!(errors.get("email"), Some("first"));
    assert_eq!(errors.len(), 2);
}

#[test]
fn test_field_errors_serialize_as_plain_map() {
    let mut errors = FieldErrors::new();
    errors.insert("fullName", "Le nom doit contenir au moins 2 caractères");
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json, serde_json::json!({ "fullName": "Le nom doit contenir au moins 2 caractères" }));
}

#[test]
fn test_wire_name() {
    assert_eq!(wire_name("full_name"), "fullName");
    assert_eq!(wire_name("confirm_password"), "confirmPassword");
    assert_eq!(wire_name("email"), "email");
}
