pub mod config;
pub mod dto;
pub mod recommender;
pub mod selection;
pub mod store;
pub mod widgets;

pub use config::DashboardConfig;
pub use dto::{BreakdownEntry, ChartMetric, SalesRecord};
pub use recommender::{recommend_metric, Recommendation, RecommendedKind};
pub use selection::{active_record, SelectionState};
pub use store::SalesRecordStore;
pub use widgets::{dashboard_view, DashboardView};
