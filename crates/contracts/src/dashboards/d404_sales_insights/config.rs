use super::dto::ChartMetric;
use crate::shared::error::DashboardError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DashboardConfig {
    pub title: String,
    pub month_placeholder: String,
    #[serde(default)]
    pub default_metric: ChartMetric,
    pub breakdown_chart: BreakdownChartConfig,
    pub trend_chart: TrendChartConfig,
    pub axis: AxisConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BreakdownChartConfig {
    /// Rendered height in pixels; width follows the container
    pub height: u32,
    pub fill: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TrendChartConfig {
    pub height: u32,
    pub stroke: String,
    pub active_dot_radius: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AxisConfig {
    pub tick_count: usize,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r##"
title = "Sales Intelligence Dashboard"
month_placeholder = "Select Month"
default_metric = "revenue"

[breakdown_chart]
height = 250
fill = "#8884d8"

[trend_chart]
height = 400
stroke = "#8884d8"
active_dot_radius = 8.0

[axis]
tick_count = 5
"##;

impl DashboardConfig {
    /// Load the embedded configuration
    pub fn load() -> Result<Self, DashboardError> {
        Self::from_toml_str(DEFAULT_CONFIG)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, DashboardError> {
        let config: DashboardConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.breakdown_chart.height == 0 {
            return Err(DashboardError::InvalidConfig(
                "breakdown_chart.height must be positive".to_string(),
            ));
        }
        if self.trend_chart.height == 0 {
            return Err(DashboardError::InvalidConfig(
                "trend_chart.height must be positive".to_string(),
            ));
        }
        let radius = self.trend_chart.active_dot_radius;
        if radius.is_nan() || radius <= 0.0 {
            return Err(DashboardError::InvalidConfig(
                "trend_chart.active_dot_radius must be positive".to_string(),
            ));
        }
        if self.axis.tick_count < 2 {
            return Err(DashboardError::InvalidConfig(
                "axis.tick_count must be at least 2".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = DashboardConfig::load().unwrap();
        assert_eq!(config.title, "Sales Intelligence Dashboard");
        assert_eq!(config.month_placeholder, "Select Month");
        assert_eq!(config.default_metric, ChartMetric::Revenue);
        assert_eq!(config.breakdown_chart.height, 250);
        assert_eq!(config.breakdown_chart.fill, "#8884d8");
        assert_eq!(config.trend_chart.height, 400);
        assert_eq!(config.trend_chart.active_dot_radius, 8.0);
        assert_eq!(config.axis.tick_count, 5);
    }

    #[test]
    fn test_default_metric_override() {
        let contents = DEFAULT_CONFIG.replace(
            r#"default_metric = "revenue""#,
            r#"default_metric = "customerSatisfaction""#,
        );
        let config = DashboardConfig::from_toml_str(&contents).unwrap();
        assert_eq!(config.default_metric, ChartMetric::CustomerSatisfaction);
    }

    #[test]
    fn test_zero_height_rejected() {
        let contents = DEFAULT_CONFIG.replace("height = 250", "height = 0");
        let result = DashboardConfig::from_toml_str(&contents);
        assert!(matches!(result, Err(DashboardError::InvalidConfig(_))));
    }

    #[test]
    fn test_single_tick_rejected() {
        let contents = DEFAULT_CONFIG.replace("tick_count = 5", "tick_count = 1");
        let result = DashboardConfig::from_toml_str(&contents);
        assert!(matches!(result, Err(DashboardError::InvalidConfig(_))));
    }

    #[test]
    fn test_unknown_metric_rejected() {
        let contents = DEFAULT_CONFIG.replace(
            r#"default_metric = "revenue""#,
            r#"default_metric = "riskFactor""#,
        );
        let result = DashboardConfig::from_toml_str(&contents);
        assert!(matches!(result, Err(DashboardError::Config(_))));
    }
}
