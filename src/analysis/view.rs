/// Read-only snapshots of the tornado table.
///
/// A `TornadoView` owns copies of the rows a query selected. It never
/// aliases the dataset, so callers can keep, sort or serialize it freely.

use serde::Serialize;
use std::collections::HashSet;

use crate::model::TornadoRecord;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TornadoView {
    rows: Vec<TornadoRecord>,
}

impl TornadoView {
    pub(crate) fn new(rows: Vec<TornadoRecord>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TornadoRecord> {
        self.rows.iter()
    }

    pub fn records(&self) -> &[TornadoRecord] {
        &self.rows
    }

    /// Highest known rating in the view; `None` if every rating is missing
    /// or the view is empty.
    pub fn max_fujita_scale(&self) -> Option<f64> {
        self.rows
            .iter()
            .filter_map(|r| r.fujita_scale)
            .fold(None, |max, f| match max {
                Some(m) if m >= f => Some(m),
                _ => Some(f),
            })
    }

    /// Number of distinct known `event_id`s in the view. Rows without an
    /// event id are not counted.
    pub fn distinct_event_count(&self) -> usize {
        self.rows
            .iter()
            .filter_map(|r| r.event_id)
            .collect::<HashSet<_>>()
            .len()
    }

    pub fn into_records(self) -> Vec<TornadoRecord> {
        self.rows
    }
}

impl<'a> IntoIterator for &'a TornadoView {
    type Item = &'a TornadoRecord;
    type IntoIter = std::slice::Iter<'a, TornadoRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn row(event_id: i64, fujita_scale: Option<f64>) -> TornadoRecord {
        TornadoRecord {
            event_id: Some(event_id),
            grid_id: Some(1),
            datetime: None,
            lon: Some(0.0),
            lat: Some(0.0),
            fujita_scale,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn test_max_ignores_missing() {
        let view = TornadoView::new(vec![row(1, None), row(2, Some(2.0)), row(3, Some(4.0))]);
        assert_eq!(view.max_fujita_scale(), Some(4.0));
    }

    #[test]
    fn test_max_of_all_missing_is_none() {
        let view = TornadoView::new(vec![row(1, None), row(2, None)]);
        assert_eq!(view.max_fujita_scale(), None);
        assert_eq!(TornadoView::default().max_fujita_scale(), None);
    }

    #[test]
    fn test_distinct_event_count() {
        let view = TornadoView::new(vec![row(1, None), row(1, Some(1.0)), row(7, None)]);
        assert_eq!(view.distinct_event_count(), 2);
        assert_eq!(view.len(), 3);
    }

    #[test]
    fn test_distinct_event_count_skips_missing_ids() {
        let mut anonymous = row(0, Some(2.0));
        anonymous.event_id = None;

        let view = TornadoView::new(vec![anonymous, row(4, None)]);
        assert_eq!(view.distinct_event_count(), 1);
    }

    #[test]
    fn test_serializes_as_array() {
        let view = TornadoView::new(vec![row(5, Some(3.0))]);
        let json = serde_json::to_value(&view).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["event_id"], 5);
        assert_eq!(json[0]["fujita_scale"], 3.0);
    }
}
