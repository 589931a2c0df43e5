//! Role → navigation menu.
//!
//! One table for every screen. Every menu starts with `Dashboard`.

use mejora_core::enums::Role;
use serde::Serialize;

const DASHBOARD_LABEL: &str = "Dashboard";
const DASHBOARD_PATH: &str = "/dashboard";

const DIRECTOR_MENU: &[&str] = &[
    DASHBOARD_LABEL,
    "Planes de Mejora",
    "Docentes",
    "Reportes",
    "Perfil",
];
const DOCENTE_MENU: &[&str] = &[DASHBOARD_LABEL, "Mis Planes", "Nuevo Plan", "Perfil"];
const DECANO_MENU: &[&str] = &[
    DASHBOARD_LABEL,
    "Aprobaciones",
    "Planes de Mejora",
    "Reportes",
    "Perfil",
];
const ADMIN_MENU: &[&str] = &[
    DASHBOARD_LABEL,
    "Usuarios",
    "Facultades",
    "Auditoría",
    "Reportes",
    "Configuración",
];

/// A menu entry. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub label: String,
    pub target_path: String,
}

/// Ordered menu labels for a raw role tag; empty for unknown tags.
#[must_use]
pub fn navigation_labels(role_tag: &str) -> &'static [&'static str] {
    match Role::from_tag(role_tag) {
        Some(role) => labels_for(role),
        None => &[],
    }
}

/// Menu entries for a raw role tag; empty for unknown tags.
#[must_use]
pub fn navigation_for(role_tag: &str) -> Vec<NavigationItem> {
    navigation_labels(role_tag)
        .iter()
        .map(|label| NavigationItem {
            label: (*label).to_string(),
            target_path: target_path_for(label),
        })
        .collect()
}

const fn labels_for(role: Role) -> &'static [&'static str] {
    match role {
        Role::Director => DIRECTOR_MENU,
        Role::Docente => DOCENTE_MENU,
        Role::Decano => DECANO_MENU,
        Role::Administrador => ADMIN_MENU,
    }
}

/// `Dashboard` is always the dashboard root; everything else nests under it.
#[must_use]
pub fn target_path_for(label: &str) -> String {
    if label == DASHBOARD_LABEL {
        return DASHBOARD_PATH.to_string();
    }
    format!("{DASHBOARD_PATH}/{}", slugify(label))
}

/// Lowercase, fold Spanish diacritics, collapse everything else to `-`.
#[must_use]
pub fn slugify(label: &str) -> String {
    let mut slug = String::with_capacity(label.len());
    let mut pending_dash = false;

    for ch in label.chars().flat_map(char::to_lowercase) {
        let folded = match ch {
            'á' | 'à' | 'ä' | 'â' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            other => other,
        };

        if folded.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(folded);
        } else {
            pending_dash = true;
        }
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_known_role_has_a_dashboard_first_menu() {
        for role in Role::ALL {
            let labels = navigation_labels(role.as_str());
            assert!(!labels.is_empty());
            assert_eq!(labels[0], "Dashboard");
        }
    }

    #[test]
    fn menus_are_deterministic() {
        for role in Role::ALL {
            assert_eq!(navigation_for(role.as_str()), navigation_for(role.as_str()));
        }
    }

    #[test]
    fn unknown_roles_get_no_menu() {
        assert!(navigation_labels("Rector").is_empty());
        assert!(navigation_for("").is_empty());
    }

    #[test]
    fn docente_menu_is_fixed() {
        let items = navigation_for("Docente");
        let pairs: Vec<(&str, &str)> = items
            .iter()
            .map(|i| (i.label.as_str(), i.target_path.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("Dashboard", "/dashboard"),
                ("Mis Planes", "/dashboard/mis-planes"),
                ("Nuevo Plan", "/dashboard/nuevo-plan"),
                ("Perfil", "/dashboard/perfil"),
            ]
        );
    }

    #[test]
    fn slugify_folds_accents_and_punctuation() {
        assert_eq!(slugify("Auditoría"), "auditoria");
        assert_eq!(slugify("Configuración"), "configuracion");
        assert_eq!(slugify("Planes de Mejora"), "planes-de-mejora");
        assert_eq!(slugify("  Año / Período  "), "ano-periodo");
    }

    #[test]
    fn admin_paths_are_slugged() {
        let paths: Vec<String> = navigation_for("Administrador")
            .into_iter()
            .map(|i| i.target_path)
            .collect();
        assert!(paths.contains(&"/dashboard/auditoria".to_string()));
        assert!(paths.contains(&"/dashboard/configuracion".to_string()));
    }
}
