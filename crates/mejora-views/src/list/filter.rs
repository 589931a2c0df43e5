use chrono::{DateTime, NaiveDate, Utc};

use super::ListRecord;

/// Inclusive calendar-date range (UTC). Either bound may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateRange {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        let date = at.date_naive();
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// Conjunction of independently optional predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PredicateSet {
    /// Case-insensitive substring matched against any search field.
    pub search_text: Option<String>,
    /// `(field, value)` pairs that must match exactly.
    pub categories: Vec<(String, String)>,
    pub date_range: Option<DateRange>,
}

impl PredicateSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle().is_none()
            && self.active_categories().next().is_none()
            && self.date_range.is_none_or(|range| range.is_open())
    }

    #[must_use]
    pub fn matches<T: ListRecord + ?Sized>(&self, record: &T) -> bool {
        if let Some(needle) = self.needle()
            && !record
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        {
            return false;
        }

        if !self
            .active_categories()
            .all(|(field, value)| record.category(field) == Some(value))
        {
            return false;
        }

        match self.date_range {
            Some(range) if !range.is_open() => {
                record.timestamp().is_some_and(|at| range.contains(at))
            }
            _ => true,
        }
    }

    fn needle(&self) -> Option<String> {
        self.search_text
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn active_categories(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .filter(|(_, value)| !value.trim().is_empty())
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }
}

/// Records satisfying every predicate, in input order.
#[must_use]
pub fn filter_records<T: ListRecord + Clone>(records: &[T], predicates: &PredicateSet) -> Vec<T> {
    if predicates.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| predicates.matches(*record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        kind: &'static str,
        at: Option<DateTime<Utc>>,
    }

    impl ListRecord for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }
        fn category(&self, field: &str) -> Option<&str> {
            (field == "kind").then_some(self.kind)
        }
        fn timestamp(&self) -> Option<DateTime<Utc>> {
            self.at
        }
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, d, 23, 59, 0).unwrap()
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Plan Tutorías", kind: "plan", at: Some(day(1)) },
            Row { name: "Usuario creado", kind: "user", at: Some(day(5)) },
            Row { name: "plan revisado", kind: "plan", at: Some(day(10)) },
            Row { name: "Sin fecha", kind: "plan", at: None },
        ]
    }

    #[test]
    fn empty_predicates_are_identity() {
        assert_eq!(filter_records(&rows(), &PredicateSet::default()), rows());
    }

    #[test]
    fn empty_input_stays_empty() {
        let predicates = PredicateSet {
            search_text: Some("plan".into()),
            ..Default::default()
        };
        assert!(filter_records::<Row>(&[], &predicates).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let predicates = PredicateSet {
            search_text: Some("  PLAN ".into()),
            ..Default::default()
        };
        let names: Vec<_> = filter_records(&rows(), &predicates).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Plan Tutorías", "plan revisado"]);
    }

    #[test]
    fn predicates_are_conjunctive() {
        let predicates = PredicateSet {
            search_text: Some("plan".into()),
            categories: vec![("kind".into(), "plan".into())],
            date_range: Some(DateRange {
                from: NaiveDate::from_ymd_opt(2026, 3, 2),
                to: None,
            }),
        };
        let names: Vec<_> = filter_records(&rows(), &predicates).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["plan revisado"]);
    }

    #[test]
    fn date_range_is_inclusive_on_both_ends() {
        let range = DateRange {
            from: NaiveDate::from_ymd_opt(2026, 3, 1),
            to: NaiveDate::from_ymd_opt(2026, 3, 5),
        };
        let predicates = PredicateSet {
            date_range: Some(range),
            ..Default::default()
        };
        let names: Vec<_> = filter_records(&rows(), &predicates).iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Plan Tutorías", "Usuario creado"]);
    }

    #[test]
    fn blank_category_values_are_ignored() {
        let predicates = PredicateSet {
            categories: vec![("kind".into(), " ".into())],
            ..Default::default()
        };
        assert!(predicates.is_empty());
        assert_eq!(filter_records(&rows(), &predicates).len(), 4);
    }

    #[test]
    fn unknown_category_field_matches_nothing() {
        let predicates = PredicateSet {
            categories: vec![("status".into(), "aprobado".into())],
            ..Default::default()
        };
        assert!(filter_records(&rows(), &predicates).is_empty());
    }
}
