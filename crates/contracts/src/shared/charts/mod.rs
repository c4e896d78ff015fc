//! Layout of small categorical charts.
//!
//! Everything here works in the logical coordinate space of an SVG `viewBox`,
//! so the frontend only has to emit elements at the computed positions.

use crate::shared::indicators::{format_value, ValueFormat};
use serde::{Deserialize, Serialize};

/// Share of a category band covered by its bar
const BAR_FILL_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 10.0,
            right: 30.0,
            bottom: 30.0,
            left: 60.0,
        }
    }
}

/// Logical canvas size plus the space reserved for axes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartFrame {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: Margin::default(),
        }
    }

    pub fn inner_left(&self) -> f64 {
        self.margin.left
    }

    pub fn inner_right(&self) -> f64 {
        self.width - self.margin.right
    }

    pub fn inner_top(&self) -> f64 {
        self.margin.top
    }

    pub fn inner_bottom(&self) -> f64 {
        self.height - self.margin.bottom
    }

    pub fn inner_width(&self) -> f64 {
        (self.inner_right() - self.inner_left()).max(0.0)
    }

    pub fn inner_height(&self) -> f64 {
        (self.inner_bottom() - self.inner_top()).max(0.0)
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Width of one category band when `count` categories share the x axis
    fn band(&self, count: usize) -> f64 {
        self.inner_width() / count.max(1) as f64
    }

    fn band_center(&self, count: usize, index: usize) -> f64 {
        self.inner_left() + (index as f64 + 0.5) * self.band(count)
    }
}

/// A labelled value on the category axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPoint {
    pub label: String,
    pub value: f64,
}

impl CategoryPoint {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

/// Axis label at a position along its axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub label: String,
    pub position: f64,
}

/// Value axis starting at zero with evenly spaced "nice" ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    pub max: f64,
    pub ticks: Vec<f64>,
}

impl ValueAxis {
    fn y(&self, frame: &ChartFrame, value: f64) -> f64 {
        let ratio = (value.max(0.0) / self.max).min(1.0);
        frame.inner_bottom() - ratio * frame.inner_height()
    }

    fn ticks(&self, frame: &ChartFrame) -> Vec<Tick> {
        self.ticks
            .iter()
            .map(|&value| Tick {
                label: format_value(value, ValueFormat::Raw),
                position: self.y(frame, value),
            })
            .collect()
    }
}

/// Build a value axis covering `max` with `tick_count` ticks (at least two).
///
/// Steps are rounded up to 1, 2, 2.5 or 5 times a power of ten.
pub fn value_axis(max: f64, tick_count: usize) -> ValueAxis {
    let intervals = tick_count.max(2) - 1;

    let (nice, exponent) = if max.is_finite() && max > 0.0 {
        nice_step(max / intervals as f64)
    } else {
        (1.0, 0)
    };

    let ticks: Vec<f64> = (0..=intervals)
        .map(|i| scale_by_power_of_ten(nice * i as f64, exponent))
        .collect();
    ValueAxis {
        max: scale_by_power_of_ten(nice * intervals as f64, exponent),
        ticks,
    }
}

/// Split `raw` into a nice mantissa and its power-of-ten exponent
fn nice_step(raw: f64) -> (f64, i32) {
    let exponent = raw.log10().floor() as i32;
    let normalized = raw / 10f64.powi(exponent);
    let nice = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|&candidate| normalized <= candidate)
        .unwrap_or(10.0);
    (nice, exponent)
}

/// `value * 10^exponent`, dividing for negative exponents so 0.3 stays 0.3
fn scale_by_power_of_ten(value: f64, exponent: i32) -> f64 {
    if exponent >= 0 {
        value * 10f64.powi(exponent)
    } else {
        value / 10f64.powi(-exponent)
    }
}

fn max_value(points: &[CategoryPoint]) -> f64 {
    points.iter().map(|p| p.value).fold(0.0, f64::max)
}

fn category_ticks(frame: &ChartFrame, points: &[CategoryPoint]) -> Vec<Tick> {
    points
        .iter()
        .enumerate()
        .map(|(i, p)| Tick {
            label: p.label.clone(),
            position: frame.band_center(points.len(), i),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Bar chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub category: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartLayout {
    pub frame: ChartFrame,
    pub bars: Vec<Bar>,
    pub y_ticks: Vec<Tick>,
    pub x_ticks: Vec<Tick>,
}

impl BarChartLayout {
    pub fn build(frame: ChartFrame, points: &[CategoryPoint], tick_count: usize) -> Self {
        let axis = value_axis(max_value(points), tick_count);
        let band = frame.band(points.len());
        let bar_width = band * BAR_FILL_RATIO;

        let bars = points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let top = axis.y(&frame, p.value);
                Bar {
                    category: p.label.clone(),
                    value: p.value,
                    x: frame.band_center(points.len(), i) - bar_width / 2.0,
                    y: top,
                    width: bar_width,
                    height: frame.inner_bottom() - top,
                }
            })
            .collect();

        Self {
            frame,
            bars,
            y_ticks: axis.ticks(&frame),
            x_ticks: category_ticks(&frame, points),
        }
    }
}

// ---------------------------------------------------------------------------
// Line chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub category: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartLayout {
    pub frame: ChartFrame,
    pub points: Vec<LinePoint>,
    /// SVG path data through all points; empty when there are none
    pub path: String,
    pub y_ticks: Vec<Tick>,
    pub x_ticks: Vec<Tick>,
}

impl LineChartLayout {
    pub fn build(frame: ChartFrame, points: &[CategoryPoint], tick_count: usize) -> Self {
        let axis = value_axis(max_value(points), tick_count);

        let line_points: Vec<LinePoint> = points
            .iter()
            .enumerate()
            .map(|(i, p)| LinePoint {
                category: p.label.clone(),
                value: p.value,
                x: frame.band_center(points.len(), i),
                y: axis.y(&frame, p.value),
            })
            .collect();

        let mut path = String::new();
        for (i, p) in line_points.iter().enumerate() {
            if i == 0 {
                path.push_str(&format!("M {:.2} {:.2}", p.x, p.y));
            } else {
                path.push_str(&format!(" L {:.2} {:.2}", p.x, p.y));
            }
        }

        Self {
            frame,
            points: line_points,
            path,
            y_ticks: axis.ticks(&frame),
            x_ticks: category_ticks(&frame, points),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_value_axis_nice_steps() {
        let axis = value_axis(35000.0, 5);
        assert_eq!(axis.ticks, vec![0.0, 10000.0, 20000.0, 30000.0, 40000.0]);
        assert_eq!(axis.max, 40000.0);

        let axis = value_axis(75000.0, 5);
        assert_eq!(axis.max, 80000.0);

        let axis = value_axis(4.9, 5);
        assert_eq!(axis.ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0]);

        let axis = value_axis(100.0, 5);
        assert_eq!(axis.max, 100.0);
    }

    #[test]
    fn test_value_axis_fractional_ticks() {
        let labels = |axis: &ValueAxis| -> Vec<String> {
            axis.ticks.iter().map(|&t| format_value(t, ValueFormat::Raw)).collect()
        };

        let axis = value_axis(0.35, 5);
        assert_eq!(labels(&axis), vec!["0", "0.1", "0.2", "0.3", "0.4"]);
        assert_eq!(axis.max, 0.4);

        let axis = value_axis(0.7, 5);
        assert_eq!(labels(&axis), vec!["0", "0.2", "0.4", "0.6", "0.8"]);

        let axis = value_axis(0.009, 5);
        assert_eq!(labels(&axis), vec!["0", "0.0025", "0.005", "0.0075", "0.01"]);
    }

    #[test]
    fn test_bar_chart_fractional_tick_labels() {
        let layout = BarChartLayout::build(
            ChartFrame::new(800.0, 250.0),
            &[CategoryPoint::new("A", 0.7)],
            5,
        );
        let labels: Vec<_> = layout.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0", "0.2", "0.4", "0.6", "0.8"]);
    }

    #[test]
    fn test_value_axis_degenerate_input() {
        let axis = value_axis(0.0, 5);
        assert_eq!(axis.ticks, vec![0.0, 1.0, 2.0, 3.0, 4.0]);

        let axis = value_axis(f64::NAN, 1);
        assert_eq!(axis.ticks, vec![0.0, 1.0]);
    }

    #[test]
    fn test_bar_chart_one_bar_per_category_in_order() {
        let frame = ChartFrame::new(800.0, 250.0);
        let points = vec![
            CategoryPoint::new("Electronics", 35000.0),
            CategoryPoint::new("Clothing", 25000.0),
            CategoryPoint::new("Accessories", 15000.0),
        ];
        let layout = BarChartLayout::build(frame, &points, 5);

        let labels: Vec<_> = layout.bars.iter().map(|b| b.category.as_str()).collect();
        assert_eq!(labels, vec!["Electronics", "Clothing", "Accessories"]);
        assert!(layout.bars.windows(2).all(|w| w[0].x < w[1].x));

        // 35000 of a 40000 axis
        let expected = frame.inner_height() * 35000.0 / 40000.0;
        assert!(approx(layout.bars[0].height, expected));
        assert!(approx(layout.bars[0].y + layout.bars[0].height, frame.inner_bottom()));
        assert!(layout.bars[0].height > layout.bars[1].height);

        assert_eq!(layout.x_ticks.len(), 3);
        assert_eq!(layout.y_ticks.len(), 5);
        assert_eq!(layout.y_ticks[4].label, "40000");
        assert!(approx(layout.y_ticks[4].position, frame.inner_top()));
    }

    #[test]
    fn test_bars_stay_inside_plot_area() {
        let frame = ChartFrame::new(800.0, 250.0);
        let points = vec![CategoryPoint::new("A", 1.0), CategoryPoint::new("B", 2.0)];
        let layout = BarChartLayout::build(frame, &points, 5);
        for bar in &layout.bars {
            assert!(bar.x >= frame.inner_left());
            assert!(bar.x + bar.width <= frame.inner_right());
            assert!(bar.y >= frame.inner_top());
        }
    }

    #[test]
    fn test_single_point_line() {
        let frame = ChartFrame::new(800.0, 400.0);
        let layout = LineChartLayout::build(frame, &[CategoryPoint::new("Dec", 75000.0)], 5);

        assert_eq!(layout.points.len(), 1);
        let point = &layout.points[0];
        assert!(approx(point.x, frame.inner_left() + frame.inner_width() / 2.0));
        assert!(layout.path.starts_with("M "));
        assert!(!layout.path.contains('L'));
        assert_eq!(layout.x_ticks[0].label, "Dec");
    }

    #[test]
    fn test_line_path_connects_points() {
        let frame = ChartFrame::new(800.0, 400.0);
        let points = vec![
            CategoryPoint::new("Jan", 10.0),
            CategoryPoint::new("Feb", 20.0),
            CategoryPoint::new("Mar", 5.0),
        ];
        let layout = LineChartLayout::build(frame, &points, 5);
        assert_eq!(layout.path.matches(" L ").count(), 2);
        assert!(layout.points[1].y < layout.points[0].y);
    }

    #[test]
    fn test_empty_line_has_empty_path() {
        let layout = LineChartLayout::build(ChartFrame::new(800.0, 400.0), &[], 5);
        assert!(layout.path.is_empty());
        assert!(layout.points.is_empty());
    }
}
