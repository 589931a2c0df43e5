//! Client-side form validation.
//!
//! Failures are reported per field and block submission; an invalid form is
//! never sent to the API.

use mejora_core::entities::NewUser;
use mejora_core::enums::Role;
use serde::Serialize;
use std::fmt;

const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check that `email` is `local@<domain>`.
///
/// An empty `institutional_domain` accepts any dotted domain.
///
/// # Errors
///
/// Returns a [`FieldError`] on the `email` field describing the problem.
pub fn validate_institutional_email(
    email: &str,
    institutional_domain: &str,
) -> Result<(), FieldError> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(FieldError::new("email", "must be an email address"));
    };

    let local_ok = !local.is_empty()
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '+'));
    let domain_ok = !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    if !local_ok || !domain_ok {
        return Err(FieldError::new("email", "must be an email address"));
    }

    let expected = institutional_domain.trim();
    if !expected.is_empty() && !domain.eq_ignore_ascii_case(expected) {
        return Err(FieldError::new(
            "email",
            format!("must be an institutional address (@{expected})"),
        ));
    }

    Ok(())
}

/// Validate a new-account form before it is sent.
///
/// # Errors
///
/// Returns every failing field, in form order.
pub fn validate_new_user(
    form: &NewUser,
    institutional_domain: &str,
) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if form.first_name.trim().is_empty() {
        errors.push(FieldError::new("nombre", "is required"));
    }
    if form.last_name.trim().is_empty() {
        errors.push(FieldError::new("apellido", "is required"));
    }
    if let Err(error) = validate_institutional_email(&form.email, institutional_domain) {
        errors.push(error);
    }
    if Role::from_tag(&form.role).is_none() {
        errors.push(FieldError::new(
            "role",
            format!(
                "must be one of {}",
                Role::ALL.map(Role::as_str).join(", ")
            ),
        ));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        errors.push(FieldError::new(
            "password",
            format!("must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    if form.password != form.password_confirmation {
        errors.push(FieldError::new(
            "password_confirmation",
            "does not match the password",
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "universidad.edu.ec";

    fn valid_form() -> NewUser {
        NewUser {
            email: "ana.ruiz@universidad.edu.ec".into(),
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            faculty: Some("Ingeniería".into()),
            role: "Docente".into(),
            password: "segura123".into(),
            password_confirmation: "segura123".into(),
        }
    }

    fn failing_fields(form: &NewUser) -> Vec<&'static str> {
        validate_new_user(form, DOMAIN)
            .expect_err("form should fail")
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    #[test]
    fn valid_form_passes() {
        assert!(validate_new_user(&valid_form(), DOMAIN).is_ok());
    }

    #[test]
    fn password_mismatch_is_reported_on_confirmation() {
        let form = NewUser {
            password_confirmation: "segura124".into(),
            ..valid_form()
        };
        assert_eq!(failing_fields(&form), vec!["password_confirmation"]);
    }

    #[test]
    fn non_institutional_email_is_rejected() {
        let form = NewUser {
            email: "ana@gmail.com".into(),
            ..valid_form()
        };
        assert_eq!(failing_fields(&form), vec!["email"]);
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "",
            "ana",
            "@universidad.edu.ec",
            "ana@",
            "a b@universidad.edu.ec",
            "ana@@universidad.edu.ec",
        ] {
            assert!(
                validate_institutional_email(email, DOMAIN).is_err(),
                "{email:?} should fail"
            );
        }
    }

    #[test]
    fn domain_match_ignores_case() {
        assert!(validate_institutional_email("Ana@Universidad.EDU.ec", DOMAIN).is_ok());
    }

    #[test]
    fn empty_domain_accepts_any_dotted_domain() {
        assert!(validate_institutional_email("ana@example.org", "").is_ok());
        assert!(validate_institutional_email("ana@localhost", "").is_err());
    }

    #[test]
    fn every_failing_field_is_reported_in_order() {
        let form = NewUser {
            first_name: " ".into(),
            role: "Rector".into(),
            password: "corta".into(),
            password_confirmation: "otra".into(),
            ..valid_form()
        };
        assert_eq!(
            failing_fields(&form),
            vec!["nombre", "role", "password", "password_confirmation"]
        );
    }
}
