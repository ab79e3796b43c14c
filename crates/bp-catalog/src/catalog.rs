//! Sorted, non-empty collection of pump records.

use std::cmp::Ordering;

use crate::record::PumpRecord;
use crate::{CatalogError, CatalogResult};

/// Pump catalog ordered by rated HP, then by maximum head.
///
/// Never empty and never mutated after construction; callers borrow
/// [`Catalog::records`] for selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    records: Vec<PumpRecord>,
}

impl Catalog {
    pub fn new(mut records: Vec<PumpRecord>) -> CatalogResult<Self> {
        if records.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        // stable: rows equal on both keys keep file order
        records.sort_by(catalog_order);
        Ok(Self { records })
    }

    pub fn records(&self) -> &[PumpRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PumpRecord> {
        self.records.iter()
    }

    /// Largest pump: highest HP, then highest head.
    pub fn last(&self) -> &PumpRecord {
        &self.records[self.records.len() - 1]
    }
}

fn catalog_order(a: &PumpRecord, b: &PumpRecord) -> Ordering {
    a.hp.total_cmp(&b.hp)
        .then_with(|| a.max_head_m.total_cmp(&b.max_head_m))
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PumpRecord;
    type IntoIter = std::slice::Iter<'a, PumpRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(model: &str, hp: f64, max_head_m: f64) -> PumpRecord {
        PumpRecord {
            model: model.into(),
            phase: "Single".into(),
            hp,
            min_flow_lph: 0.0,
            max_flow_lph: 1000.0,
            min_head_m: 0.0,
            max_head_m,
            stages: None,
        }
    }

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(Catalog::new(vec![]), Err(CatalogError::EmptyCatalog)));
    }

    #[test]
    fn sorted_by_hp_then_max_head() {
        let catalog = Catalog::new(vec![
            rec("c", 2.0, 40.0),
            rec("a", 1.0, 80.0),
            rec("b", 1.0, 50.0),
            rec("d", 0.5, 90.0),
        ])
        .unwrap();
        let models: Vec<&str> = catalog.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(models, vec!["d", "b", "a", "c"]);
        assert_eq!(catalog.last().model, "c");
    }

    #[test]
    fn ties_keep_file_order() {
        let catalog = Catalog::new(vec![rec("first", 1.0, 50.0), rec("second", 1.0, 50.0)]).unwrap();
        assert_eq!(catalog.records()[0].model, "first");
    }
}
