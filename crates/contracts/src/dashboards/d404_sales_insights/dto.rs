use serde::{Deserialize, Serialize};

/// Sales figures for a single month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    /// Short month label (e.g., "Jan"), unique within a dataset
    pub month: String,
    pub revenue: f64,
    pub customers: f64,
    pub new_products: f64,
    /// Percentage value (22 means 22%)
    pub profit_margin: f64,
    /// Rating in the 0..=5 range
    pub customer_satisfaction: f64,
    /// Not consumed by any widget
    pub risk_factor: f64,
    /// Not consumed by any widget
    pub competitor_comparison: f64,
    /// Per-category revenue split, in display order
    pub sales_breakdown: Vec<BreakdownEntry>,
}

/// One bar of the sales breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub category: String,
    pub value: f64,
}

impl BreakdownEntry {
    pub fn new(category: &str, value: f64) -> Self {
        Self {
            category: category.to_string(),
            value,
        }
    }
}

/// Numeric fields that can be plotted on the trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartMetric {
    #[default]
    Revenue,
    Customers,
    NewProducts,
    ProfitMargin,
    CustomerSatisfaction,
}

impl ChartMetric {
    /// Field name as it appears in the dataset
    pub fn key(&self) -> &'static str {
        match self {
            ChartMetric::Revenue => "revenue",
            ChartMetric::Customers => "customers",
            ChartMetric::NewProducts => "newProducts",
            ChartMetric::ProfitMargin => "profitMargin",
            ChartMetric::CustomerSatisfaction => "customerSatisfaction",
        }
    }

    pub fn value_of(&self, record: &SalesRecord) -> f64 {
        match self {
            ChartMetric::Revenue => record.revenue,
            ChartMetric::Customers => record.customers,
            ChartMetric::NewProducts => record.new_products,
            ChartMetric::ProfitMargin => record.profit_margin,
            ChartMetric::CustomerSatisfaction => record.customer_satisfaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_uses_camel_case_fields() {
        let json = r#"{
            "month": "Mar",
            "revenue": 1000,
            "customers": 10,
            "newProducts": 1,
            "profitMargin": 12.5,
            "customerSatisfaction": 4.1,
            "riskFactor": 0.4,
            "competitorComparison": -2,
            "salesBreakdown": [{ "category": "Toys", "value": 400 }]
        }"#;
        let record: SalesRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.month, "Mar");
        assert_eq!(record.new_products, 1.0);
        assert_eq!(record.profit_margin, 12.5);
        assert_eq!(record.competitor_comparison, -2.0);
        assert_eq!(record.sales_breakdown, vec![BreakdownEntry::new("Toys", 400.0)]);
    }

    #[test]
    fn test_chart_metric_keys_match_serde_names() {
        let metrics = [
            ChartMetric::Revenue,
            ChartMetric::Customers,
            ChartMetric::NewProducts,
            ChartMetric::ProfitMargin,
            ChartMetric::CustomerSatisfaction,
        ];
        for metric in metrics {
            let json = serde_json::to_string(&metric).unwrap();
            assert_eq!(json, format!("\"{}\"", metric.key()));
        }
        assert!(serde_json::from_str::<ChartMetric>("\"riskFactor\"").is_err());
        assert_eq!(ChartMetric::default(), ChartMetric::Revenue);
    }
}
