mod breakdown_chart;
mod dashboard;
mod insight_banner;
mod trend_chart;

pub use breakdown_chart::SalesBreakdownChart;
pub use dashboard::SalesInsightsDashboard;
pub use insight_banner::PerformanceInsights;
pub use trend_chart::MainTrendChart;
