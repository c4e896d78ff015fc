use super::dto::{ChartMetric, SalesRecord};
use super::store::SalesRecordStore;

/// What the user is currently looking at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// `None` shows the latest record
    pub selected_month: Option<String>,
    pub selected_metric: ChartMetric,
}

impl SelectionState {
    pub fn with_metric(metric: ChartMetric) -> Self {
        Self {
            selected_month: None,
            selected_metric: metric,
        }
    }

    pub fn set_month(&mut self, month: impl Into<String>) {
        self.selected_month = Some(month.into());
    }

    /// Dropdown value; empty while nothing is selected
    pub fn month_value(&self) -> String {
        self.selected_month.clone().unwrap_or_default()
    }
}

/// Record to display: the selected month if present in the store, the latest
/// record otherwise.
pub fn active_record<'a>(store: &'a SalesRecordStore, selection: &SelectionState) -> &'a SalesRecord {
    selection
        .selected_month
        .as_deref()
        .and_then(|month| store.find(month))
        .unwrap_or_else(|| store.latest())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_sales_insights::store::tests::record;

    #[test]
    fn test_no_selection_uses_latest() {
        let store = SalesRecordStore::mock().unwrap();
        let selection = SelectionState::default();
        assert_eq!(active_record(&store, &selection).month, "Dec");
        assert_eq!(selection.selected_metric, ChartMetric::Revenue);
        assert_eq!(selection.month_value(), "");
    }

    #[test]
    fn test_every_month_selectable() {
        let store = SalesRecordStore::mock().unwrap();
        for month in store.months() {
            let mut selection = SelectionState::default();
            selection.set_month(month.clone());
            assert_eq!(active_record(&store, &selection).month, month);
            assert_eq!(selection.month_value(), month);
        }
    }

    #[test]
    fn test_unknown_month_falls_back_to_latest() {
        let store = SalesRecordStore::mock().unwrap();
        let mut selection = SelectionState::default();
        selection.set_month("Unknown");

        let fallback = active_record(&store, &SelectionState::default());
        assert_eq!(active_record(&store, &selection), fallback);
        assert_eq!(active_record(&store, &selection).month, "Dec");
    }

    #[test]
    fn test_derivation_is_stable() {
        let store = SalesRecordStore::mock().unwrap();
        let mut selection = SelectionState::default();
        selection.set_month("Feb");
        let first = active_record(&store, &selection);
        let second = active_record(&store, &selection);
        assert!(std::ptr::eq(first, second));
    }

    #[test]
    fn test_single_record_store() {
        let store = SalesRecordStore::new(vec![record("Only", 1.0, 2.0, 3.0)]).unwrap();
        let mut selection = SelectionState::with_metric(ChartMetric::Customers);
        assert_eq!(active_record(&store, &selection).month, "Only");
        selection.set_month("Missing");
        assert_eq!(active_record(&store, &selection).month, "Only");
        assert_eq!(selection.selected_metric, ChartMetric::Customers);
    }
}
