use super::axes::axes_view;
use contracts::shared::charts::BarChartLayout;
use contracts::shared::indicators::{format_value, ValueFormat};
use leptos::prelude::*;

/// Categorical bar chart: fixed height, width follows the container
#[component]
pub fn BarChart(
    #[prop(into)]
    layout: Signal<BarChartLayout>,
    /// Rendered height in pixels
    height: u32,
    #[prop(into)]
    fill: String,
) -> impl IntoView {
    let content = move || {
        let layout = layout.get();
        let fill = fill.clone();

        let bars = layout
            .bars
            .into_iter()
            .map(|bar| {
                let tooltip = format!("{}: {}", bar.category, format_value(bar.value, ValueFormat::Raw));
                let center = bar.x + bar.width / 2.0;
                view! {
                    <g class="chart-bar">
                        <rect
                            x=bar.x.to_string()
                            y=bar.y.to_string()
                            width=bar.width.to_string()
                            height=bar.height.to_string()
                            fill=fill.clone()
                        />
                        <text
                            class="chart-tooltip"
                            x=center.to_string()
                            y=(bar.y - 6.0).to_string()
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
                class="chart chart--bar"
                width="100%"
                height=height.to_string()
                viewBox=layout.frame.view_box()
                preserveAspectRatio="xMidYMid meet"
            >
                {axes_view(&layout.frame, &layout.y_ticks, &layout.x_ticks)}
                {bars}
            </svg>
        }
    };

    view! { <div class="chart-container">{content}</div> }
}
