//! Named row-level predicate registry.
use std::sync::Arc;

use super::RowFilter;
use crate::row::Row;

/// Markers that stand for "no usable value" in raw sources.
const PLACEHOLDERS: [&str; 2] = ["?", "-"];

pub type Predicate = Arc<dyn Fn(&Row) -> bool + Send + Sync>;

/// Ordered set of named predicates applied to every row before it is
/// written out. A row is dropped if any predicate returns `false`.
///
/// Registration order is kept; registering an already-present name
/// overwrites the predicate in place (last registration wins).
#[derive(Clone)]
pub struct Validators {
    entries: Vec<(String, Predicate)>,
}

impl Validators {
    /// Empty registry, no predicates.
    pub fn empty() -> Self {
        Validators {
            entries: Vec::new(),
        }
    }

    /// Register a predicate under `name`, replacing any previous
    /// registration of the same name.
    pub fn register<F>(&mut self, name: &str, predicate: F)
    where
        F: Fn(&Row) -> bool + Send + Sync + 'static,
    {
        match self.entries.iter_mut().find(|(n, _)| n.as_str() == name) {
            Some((_, p)) => *p = Arc::new(predicate),
            None => self.entries.push((name.to_string(), Arc::new(predicate))),
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl RowFilter<&Row> for Validators {
    fn accept(&self, row: &Row) -> bool {
        self.entries.iter().all(|(_, p)| p(row))
    }
}

impl Default for Validators {
    /// Registry holding the `Value` predicate: reject rows whose value
    /// is empty or a placeholder marker.
    fn default() -> Self {
        let mut v = Validators::empty();
        v.register("Value", valid_value);
        v
    }
}

fn valid_value(row: &Row) -> bool {
    !row.value.is_empty() && !PLACEHOLDERS.contains(&row.value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::RowFilter;

    fn row(value: &str) -> Row {
        Row::new("r1", "lang1", "1", value)
    }

    #[test]
    fn default_value_predicate() {
        let v = Validators::default();
        for good in ["kasa", "tapu"] {
            assert!(v.accept(&row(good)), "{good} should be accepted");
        }
        for bad in ["?", "", "-"] {
            assert!(!v.accept(&row(bad)), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn all_predicates_must_pass() {
        let mut v = Validators::default();
        v.register("Source", |r: &Row| r.source.is_some());
        assert!(!v.accept(&row("kasa")));
        let mut r = row("kasa");
        r.source = Some("smith1984".to_string());
        assert!(v.accept(&r));
    }

    #[test]
    fn last_registration_wins_in_place() {
        let mut v = Validators::default();
        assert!(!v.accept(&row("?")));
        // dataset-specific override: question marks are fine here
        v.register("Value", |r: &Row| !r.value.is_empty());
        assert!(v.accept(&row("?")));
        assert!(!v.accept(&row("")));
        assert_eq!(v.names().collect::<Vec<_>>(), vec!["Value"]);
    }
}
