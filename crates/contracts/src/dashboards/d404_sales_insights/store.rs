use super::dto::SalesRecord;
use crate::shared::error::DashboardError;
use std::collections::HashSet;

/// Embedded mock dataset
const SALES_DATA: &str = include_str!("sales_data.json");

/// Immutable, ordered collection of monthly sales records.
///
/// Construction guarantees the list is non-empty and every `month` is unique,
/// so [`SalesRecordStore::latest`] never fails.
#[derive(Debug, Clone, PartialEq)]
pub struct SalesRecordStore {
    records: Vec<SalesRecord>,
}

impl SalesRecordStore {
    pub fn new(records: Vec<SalesRecord>) -> Result<Self, DashboardError> {
        if records.is_empty() {
            return Err(DashboardError::EmptyStore);
        }

        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.month.as_str()) {
                return Err(DashboardError::DuplicateMonth(record.month.clone()));
            }
        }

        Ok(Self { records })
    }

    /// Parse a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, DashboardError> {
        let records: Vec<SalesRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Store seeded with the bundled mock dataset
    pub fn mock() -> Result<Self, DashboardError> {
        Self::from_json(SALES_DATA)
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for a constructed store
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Month keys in dataset order
    pub fn months(&self) -> Vec<String> {
        self.records.iter().map(|r| r.month.clone()).collect()
    }

    /// First record whose month equals `month`
    pub fn find(&self, month: &str) -> Option<&SalesRecord> {
        self.records.iter().find(|r| r.month == month)
    }

    /// Last record in dataset order
    pub fn latest(&self) -> &SalesRecord {
        // non-empty by construction
        &self.records[self.records.len() - 1]
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::dashboards::d404_sales_insights::dto::BreakdownEntry;

    pub(crate) fn record(month: &str, revenue: f64, customers: f64, new_products: f64) -> SalesRecord {
        SalesRecord {
            month: month.to_string(),
            revenue,
            customers,
            new_products,
            profit_margin: 20.0,
            customer_satisfaction: 4.0,
            risk_factor: 0.0,
            competitor_comparison: 0.0,
            sales_breakdown: vec![BreakdownEntry::new("Electronics", revenue / 2.0)],
        }
    }

    #[test]
    fn test_mock_dataset_loads() {
        let store = SalesRecordStore::mock().unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.months(), vec!["Jan", "Feb", "Dec"]);

        let jan = store.find("Jan").unwrap();
        assert_eq!(jan.revenue, 45000.0);
        assert_eq!(jan.customer_satisfaction, 4.5);
        assert_eq!(jan.risk_factor, 0.3);
        assert_eq!(jan.sales_breakdown.len(), 3);
        assert_eq!(jan.sales_breakdown[0], BreakdownEntry::new("Electronics", 20000.0));
    }

    #[test]
    fn test_latest_is_last_in_dataset_order() {
        let store = SalesRecordStore::mock().unwrap();
        assert_eq!(store.latest().month, "Dec");
        assert_eq!(store.latest().revenue, 75000.0);
    }

    #[test]
    fn test_find_missing_month() {
        let store = SalesRecordStore::mock().unwrap();
        assert!(store.find("Unknown").is_none());
        assert!(store.find("jan").is_none());
    }

    #[test]
    fn test_empty_store_rejected() {
        let result = SalesRecordStore::new(Vec::new());
        assert!(matches!(result, Err(DashboardError::EmptyStore)));

        let result = SalesRecordStore::from_json("[]");
        assert!(matches!(result, Err(DashboardError::EmptyStore)));
    }

    #[test]
    fn test_duplicate_month_rejected() {
        let records = vec![
            record("Jan", 1.0, 1.0, 1.0),
            record("Feb", 2.0, 2.0, 2.0),
            record("Jan", 3.0, 3.0, 3.0),
        ];
        match SalesRecordStore::new(records) {
            Err(DashboardError::DuplicateMonth(month)) => assert_eq!(month, "Jan"),
            other => panic!("expected duplicate month error, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = SalesRecordStore::from_json(r#"[{"month": "Jan"}]"#);
        assert!(matches!(result, Err(DashboardError::Dataset(_))));
    }
}
