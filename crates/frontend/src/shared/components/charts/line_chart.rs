use super::axes::axes_view;
use contracts::shared::charts::LineChartLayout;
use contracts::shared::indicators::{format_value, ValueFormat};
use leptos::prelude::*;

/// Line chart over a category axis; every point gets a dot that grows on hover
#[component]
pub fn LineChart(
    #[prop(into)]
    layout: Signal<LineChartLayout>,
    /// Rendered height in pixels
    height: u32,
    #[prop(into)]
    stroke: String,
    /// Name of the plotted field, shown in the tooltip
    #[prop(into)]
    series: Signal<String>,
    /// Dot radius while hovered
    active_dot_radius: f64,
) -> impl IntoView {
    let content = move || {
        let layout = layout.get();
        let series = series.get();
        let stroke = stroke.clone();

        let dots = layout
            .points
            .into_iter()
            .map(|point| {
                let tooltip = format!(
                    "{} · {}: {}",
                    point.category,
                    series,
                    format_value(point.value, ValueFormat::Raw)
                );
                view! {
                    <g class="chart-point" style=format!("--active-dot-radius: {}px;", active_dot_radius)>
                        <circle
                            class="chart-point__dot"
                            cx=point.x.to_string()
                            cy=point.y.to_string()
                            r="3"
                            fill="#fff"
                            stroke=stroke.clone()
                            stroke-width="2"
                        />
                        <text
                            class="chart-tooltip"
                            x=point.x.to_string()
                            y=(point.y - active_dot_radius - 6.0).to_string()
                            text-anchor="middle"
                        >
                            {tooltip}
                        </text>
                    </g>
                }
            })
            .collect::<Vec<_>>();

        view! {
            <svg
                class="chart chart--line"
                width="100%"
                height=height.to_string()
                viewBox=layout.frame.view_box()
                preserveAspectRatio="xMidYMid meet"
            >
                {axes_view(&layout.frame, &layout.y_ticks, &layout.x_ticks)}
                <path d=layout.path fill="none" stroke=stroke.clone() stroke-width="2" />
                {dots}
            </svg>
        }
    };

    view! { <div class="chart-container">{content}</div> }
}
