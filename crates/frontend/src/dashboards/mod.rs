pub mod d404_sales_insights;

pub use d404_sales_insights::ui::SalesInsightsDashboard;
