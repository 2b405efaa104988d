use crate::domain::returns::{Horizon, ReturnRecord};
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Operators ordered by one horizon's nominal return, best first.
///
/// Built once per run; the export paths only read from it.
#[derive(Debug, Clone)]
pub struct RankingTable {
    sort_key: Horizon,
    generated_at: DateTime<Utc>,
    records: Vec<ReturnRecord>,
}

impl RankingTable {
    /// Stable descending sort by the sort horizon. Records with no value for
    /// the sort horizon go last, keeping their relative input order.
    pub fn build(mut records: Vec<ReturnRecord>, sort_key: Horizon) -> Self {
        records.sort_by(|a, b| compare_by(sort_key, a, b));

        Self {
            sort_key,
            generated_at: Utc::now(),
            records,
        }
    }

    pub fn sort_key(&self) -> Horizon {
        self.sort_key
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    pub fn records(&self) -> &[ReturnRecord] {
        &self.records
    }
}

fn compare_by(sort_key: Horizon, a: &ReturnRecord, b: &ReturnRecord) -> Ordering {
    match (a.value(sort_key), b.value(sort_key)) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(code: &str, short: Option<f64>, medium: Option<f64>, long: Option<f64>) -> ReturnRecord {
        ReturnRecord {
            code: code.to_string(),
            name: code.to_string(),
            short,
            medium,
            long,
        }
    }

    #[test]
    fn ranks_by_long_horizon_descending() {
        let records = vec![
            record("BNV", Some(5.2), Some(4.8), Some(7.0)),
            record("BCR", Some(6.1), Some(5.9), Some(6.5)),
        ];

        let table = RankingTable::build(records, Horizon::Long);
        let codes: Vec<&str> = table.records().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["BNV", "BCR"]);
    }

    #[test]
    fn sort_key_selects_the_ranking_horizon() {
        let records = vec![
            record("BNV", Some(5.2), None, Some(7.0)),
            record("BCR", Some(6.1), None, Some(6.5)),
        ];

        // Same records, short horizon: BCR leads.
        let table = RankingTable::build(records, Horizon::Short);
        let codes: Vec<&str> = table.records().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["BCR", "BNV"]);
    }

    #[test]
    fn unknown_sort_values_go_last() {
        let records = vec![
            record("ACO", Some(9.9), Some(9.9), None),
            record("BNV", Some(5.2), Some(4.8), Some(7.0)),
            record("VID", None, None, None),
            record("BCR", Some(6.1), Some(5.9), Some(6.5)),
        ];

        let table = RankingTable::build(records, Horizon::Long);
        let codes: Vec<&str> = table.records().iter().map(|r| r.code.as_str()).collect();

        // Known long values first, then the unknowns in their input order.
        assert_eq!(codes, vec!["BNV", "BCR", "ACO", "VID"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let records = vec![
            record("POP", None, None, Some(6.0)),
            record("BAC", None, None, Some(6.0)),
            record("VID", None, None, Some(6.0)),
        ];

        let table = RankingTable::build(records, Horizon::Long);
        let codes: Vec<&str> = table.records().iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["POP", "BAC", "VID"]);
    }

    #[test]
    fn empty_input_builds_an_empty_table() {
        let table = RankingTable::build(Vec::new(), Horizon::Long);
        assert!(table.records().is_empty());
        assert_eq!(table.sort_key(), Horizon::Long);
    }
}
