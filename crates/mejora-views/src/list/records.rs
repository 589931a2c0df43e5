//! `ListRecord` projections for the API entities and for raw JSON.

use chrono::{DateTime, Utc};
use mejora_core::entities::{AuditLog, Faculty, Plan, User};
use mejora_core::enums::{AuditAction, EntityKind, Role};
use serde_json::Value;

use super::ListRecord;

impl ListRecord for AuditLog {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.description.as_str(),
            self.entity.as_str(),
            self.action.as_str(),
        ];
        fields.extend(self.user_email.as_deref());
        fields.extend(self.ip_address.as_deref());
        fields
    }

    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "entity" => Some(match self.entity_kind() {
                EntityKind::Other => self.entity.as_str(),
                kind => kind.as_str(),
            }),
            "action" => Some(match self.action_kind() {
                AuditAction::Other => self.action.as_str(),
                action => action.as_str(),
            }),
            "user_email" => self.user_email.as_deref(),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

impl ListRecord for User {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.role.as_str(),
        ];
        fields.extend(self.faculty.as_deref());
        fields
    }

    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "role" => Some(match Role::from_tag(&self.role) {
                Some(role) => role.as_str(),
                None => self.role.as_str(),
            }),
            "faculty" => self.faculty.as_deref(),
            "active" => Some(if self.active { "true" } else { "false" }),
            _ => None,
        }
    }
}

impl ListRecord for Plan {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str()];
        fields.extend(self.description.as_deref());
        fields.extend(self.owner_name.as_deref());
        fields.extend(self.faculty.as_deref());
        fields
    }

    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "status" => Some(self.status.as_str()),
            "faculty" => self.faculty.as_deref(),
            _ => None,
        }
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        Some(self.created_at)
    }
}

impl ListRecord for Faculty {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        fields.extend(self.code.as_deref());
        fields.extend(self.dean.as_deref());
        fields
    }

    fn category(&self, field: &str) -> Option<&str> {
        match field {
            "code" => self.code.as_deref(),
            _ => None,
        }
    }
}

const TIMESTAMP_KEYS: [&str; 3] = ["created_at", "createdAt", "fecha"];

/// Raw records: string leaves of the object and of its direct child objects.
/// Nested categories use dotted names (`"user.role"`).
impl ListRecord for Value {
    fn search_fields(&self) -> Vec<&str> {
        let Some(map) = self.as_object() else {
            return Vec::new();
        };
        let mut fields = Vec::new();
        for value in map.values() {
            match value {
                Value::String(s) => fields.push(s.as_str()),
                Value::Object(nested) => {
                    fields.extend(nested.values().filter_map(Value::as_str));
                }
                _ => {}
            }
        }
        fields
    }

    fn category(&self, field: &str) -> Option<&str> {
        match field.split_once('.') {
            Some((parent, child)) => self.get(parent)?.get(child)?.as_str(),
            None => self.get(field)?.as_str(),
        }
    }

    fn timestamp(&self) -> Option<DateTime<Utc>> {
        TIMESTAMP_KEYS
            .iter()
            .filter_map(|key| self.get(*key)?.as_str())
            .find_map(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|at| at.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::{PredicateSet, filter_records};
    use serde_json::json;

    #[test]
    fn json_projection_covers_one_nested_level() {
        let record = json!({
            "id": 1,
            "description": "Plan aprobado",
            "user": {"email": "decano@universidad.edu.ec", "role": "Decano", "meta": {"deep": "ignored"}},
        });
        let fields = record.search_fields();
        assert!(fields.contains(&"Plan aprobado"));
        assert!(fields.contains(&"decano@universidad.edu.ec"));
        assert!(!fields.contains(&"ignored"));
        assert_eq!(record.category("user.role"), Some("Decano"));
        assert_eq!(record.category("missing"), None);
    }

    #[test]
    fn json_timestamp_accepts_common_keys() {
        let record = json!({"createdAt": "2026-03-04T10:00:00Z"});
        assert!(record.timestamp().is_some());
        assert!(json!({"created_at": "ayer"}).timestamp().is_none());
    }

    #[test]
    fn non_object_json_has_no_fields() {
        assert!(json!("texto").search_fields().is_empty());
        let predicates = PredicateSet {
            search_text: Some("texto".into()),
            ..Default::default()
        };
        assert!(filter_records(&[json!("texto")], &predicates).is_empty());
    }

    fn user_with_role(role: &str) -> User {
        serde_json::from_value(json!({
            "id": 4,
            "email": "ana.ruiz@universidad.edu.ec",
            "nombre": "Ana",
            "apellido": "Ruiz",
            "facultad": null,
            "role": role,
            "active": true,
        }))
        .unwrap()
    }

    #[test]
    fn role_category_is_canonical_for_known_roles() {
        let users = [user_with_role("docente"), user_with_role("Rector")];
        assert_eq!(users[0].category("role"), Some("Docente"));
        assert_eq!(users[1].category("role"), Some("Rector"));

        let predicates = PredicateSet {
            categories: vec![("role".into(), "Docente".into())],
            ..Default::default()
        };
        let kept = filter_records(&users, &predicates);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].role, "docente");
    }

    #[test]
    fn audit_category_keeps_unknown_tags_verbatim() {
        let log: AuditLog = serde_json::from_value(json!({
            "id": 1,
            "entity": "Plan",
            "entity_id": null,
            "action": "Export",
            "user_email": null,
            "description": "",
            "ip_address": null,
            "created_at": "2026-03-04T10:00:00Z",
        }))
        .unwrap();
        assert_eq!(log.category("entity"), Some("plan"));
        assert_eq!(log.category("action"), Some("Export"));
    }
}
