mod axes;
pub mod bar_chart;
pub mod line_chart;

pub use bar_chart::BarChart;
pub use line_chart::LineChart;
