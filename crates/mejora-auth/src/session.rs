use mejora_core::entities::UserProfile;
use mejora_core::enums::Role;
use serde::{Deserialize, Serialize};

/// Client-held proof of authentication plus the cached profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer credential.
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    #[must_use]
    pub const fn new(token: String, user: UserProfile) -> Self {
        Self { token, user }
    }

    /// Resolved role, or `None` for tags outside the known set.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        Role::from_tag(&self.user.role)
    }

    /// Two-letter avatar initials: first letter of `nombre` and `apellido`.
    ///
    /// Falls back to the first letter of the email, then to `"?"`.
    #[must_use]
    pub fn initials(&self) -> String {
        let initials: String = [&self.user.nombre, &self.user.apellido]
            .into_iter()
            .filter_map(|part| part.trim().chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        if !initials.is_empty() {
            return initials;
        }

        self.user
            .email
            .trim()
            .chars()
            .next()
            .map_or_else(|| "?".to_string(), |c| c.to_uppercase().collect())
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{} {}", self.user.nombre.trim(), self.user.apellido.trim())
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(nombre: &str, apellido: &str, email: &str, role: &str) -> Session {
        Session::new(
            "abc".into(),
            UserProfile {
                id: None,
                email: email.into(),
                nombre: nombre.into(),
                apellido: apellido.into(),
                facultad: None,
                role: role.into(),
            },
        )
    }

    #[test]
    fn initials_from_first_and_last_name() {
        assert_eq!(session("Ana", "Ruiz", "", "Docente").initials(), "AR");
    }

    #[test]
    fn initials_uppercase_accented_letters() {
        assert_eq!(session("álvaro", "ñúñez", "", "Docente").initials(), "ÁÑ");
    }

    #[test]
    fn initials_with_only_first_name() {
        assert_eq!(session("Ana", "  ", "", "Docente").initials(), "A");
    }

    #[test]
    fn initials_fall_back_to_email_then_placeholder() {
        assert_eq!(session("", "", "luis@x.edu", "Docente").initials(), "L");
        assert_eq!(session("", "", "", "Docente").initials(), "?");
    }

    #[test]
    fn role_resolves_known_and_unknown_tags() {
        assert_eq!(session("Ana", "Ruiz", "", "Decano").role(), Some(Role::Decano));
        assert_eq!(session("Ana", "Ruiz", "", "Rector").role(), None);
    }

    #[test]
    fn display_name_trims_missing_parts() {
        assert_eq!(session("Ana", "Ruiz", "", "Docente").display_name(), "Ana Ruiz");
        assert_eq!(session("Ana", "", "", "Docente").display_name(), "Ana");
    }
}
