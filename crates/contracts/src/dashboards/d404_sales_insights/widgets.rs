//! Pure projections from the active record to what each card shows.

use super::config::DashboardConfig;
use super::dto::{ChartMetric, SalesRecord};
use super::recommender::{recommend_metric, Recommendation};
use super::selection::{active_record, SelectionState};
use super::store::SalesRecordStore;
use crate::shared::charts::{BarChartLayout, CategoryPoint, ChartFrame, LineChartLayout};
use crate::shared::indicators::{format_value, IndicatorSet, IndicatorTile, Tone, ValueFormat};

/// Logical width of every chart; the SVG scales it to the container
pub const CHART_VIEW_WIDTH: f64 = 800.0;

#[derive(Debug, Clone, PartialEq)]
pub struct InsightBanner {
    pub recommendation: Recommendation,
    /// "Current Value: 75000"
    pub value_text: String,
}

pub fn insight_banner(record: &SalesRecord) -> InsightBanner {
    let recommendation = recommend_metric(record);
    let value_text = format!(
        "Current Value: {}",
        format_value(recommendation.value, ValueFormat::Raw)
    );
    InsightBanner {
        recommendation,
        value_text,
    }
}

pub fn performance_indicators(record: &SalesRecord) -> IndicatorSet {
    IndicatorSet {
        label: "Performance Indicators".to_string(),
        icon: "filter".to_string(),
        columns: 3,
        tiles: vec![
            IndicatorTile::new(
                "profit_margin",
                "Profit Margin",
                "target",
                Tone::Green,
                record.profit_margin,
                ValueFormat::Percent,
            ),
            IndicatorTile::new(
                "customer_satisfaction",
                "Satisfaction",
                "star",
                Tone::Yellow,
                record.customer_satisfaction,
                ValueFormat::Raw,
            ),
            IndicatorTile::new(
                "new_products",
                "New Products",
                "package",
                Tone::Blue,
                record.new_products,
                ValueFormat::Raw,
            ),
        ],
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownChart {
    pub title: String,
    pub icon: String,
    pub height: u32,
    pub fill: String,
    pub layout: BarChartLayout,
}

pub fn breakdown_chart(record: &SalesRecord, config: &DashboardConfig) -> BreakdownChart {
    let points: Vec<CategoryPoint> = record
        .sales_breakdown
        .iter()
        .map(|entry| CategoryPoint::new(&entry.category, entry.value))
        .collect();

    let frame = ChartFrame::new(CHART_VIEW_WIDTH, config.breakdown_chart.height as f64);
    BreakdownChart {
        title: "Sales Breakdown".to_string(),
        icon: "bar-chart-2".to_string(),
        height: config.breakdown_chart.height,
        fill: config.breakdown_chart.fill.clone(),
        layout: BarChartLayout::build(frame, &points, config.axis.tick_count),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendChart {
    pub title: String,
    /// Dataset field the line follows
    pub series: String,
    pub height: u32,
    pub stroke: String,
    pub active_dot_radius: f64,
    pub layout: LineChartLayout,
}

/// Line chart of the active record alone, month on the category axis
pub fn trend_chart(record: &SalesRecord, metric: ChartMetric, config: &DashboardConfig) -> TrendChart {
    let points = [CategoryPoint::new(&record.month, metric.value_of(record))];
    let frame = ChartFrame::new(CHART_VIEW_WIDTH, config.trend_chart.height as f64);
    TrendChart {
        title: format!("{} Sales Metrics", record.month),
        series: metric.key().to_string(),
        height: config.trend_chart.height,
        stroke: config.trend_chart.stroke.clone(),
        active_dot_radius: config.trend_chart.active_dot_radius,
        layout: LineChartLayout::build(frame, &points, config.axis.tick_count),
    }
}

/// Everything the page renders for one selection
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub title: String,
    pub month_placeholder: String,
    pub month_options: Vec<String>,
    pub month_value: String,
    pub insight: InsightBanner,
    pub indicators: IndicatorSet,
    pub breakdown: BreakdownChart,
    pub trend: TrendChart,
}

pub fn dashboard_view(
    store: &SalesRecordStore,
    selection: &SelectionState,
    config: &DashboardConfig,
) -> DashboardView {
    let record = active_record(store, selection);
    DashboardView {
        title: config.title.clone(),
        month_placeholder: config.month_placeholder.clone(),
        month_options: store.months(),
        month_value: selection.month_value(),
        insight: insight_banner(record),
        indicators: performance_indicators(record),
        breakdown: breakdown_chart(record, config),
        trend: trend_chart(record, selection.selected_metric, config),
    }
}
