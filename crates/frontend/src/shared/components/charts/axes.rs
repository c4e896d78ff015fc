use contracts::shared::charts::{ChartFrame, Tick};
use leptos::prelude::*;

/// Dashed grid, both axes and their labels
pub fn axes_view(frame: &ChartFrame, y_ticks: &[Tick], x_ticks: &[Tick]) -> AnyView {
    let left = frame.inner_left();
    let right = frame.inner_right();
    let top = frame.inner_top();
    let bottom = frame.inner_bottom();

    let horizontal_grid = y_ticks
        .iter()
        .map(|tick| {
            let y = tick.position.to_string();
            view! {
                <line
                    class="chart-grid"
                    x1=left.to_string()
                    y1=y.clone()
                    x2=right.to_string()
                    y2=y
                    stroke-dasharray="3 3"
                />
            }
        })
        .collect::<Vec<_>>();

    let vertical_grid = x_ticks
        .iter()
        .map(|tick| {
            let x = tick.position.to_string();
            view! {
                <line
                    class="chart-grid"
                    x1=x.clone()
                    y1=top.to_string()
                    x2=x
                    y2=bottom.to_string()
                    stroke-dasharray="3 3"
                />
            }
        })
        .collect::<Vec<_>>();

    let y_labels = y_ticks
        .iter()
        .map(|tick| {
            view! {
                <text
                    class="chart-axis__label"
                    x=(left - 8.0).to_string()
                    y=tick.position.to_string()
                    text-anchor="end"
                    dominant-baseline="middle"
                >
                    {tick.label.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    let x_labels = x_ticks
        .iter()
        .map(|tick| {
            view! {
                <text
                    class="chart-axis__label"
                    x=tick.position.to_string()
                    y=(bottom + 20.0).to_string()
                    text-anchor="middle"
                >
                    {tick.label.clone()}
                </text>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <g class="chart-axes">
            {horizontal_grid}
            {vertical_grid}
            <line class="chart-axis" x1=left.to_string() y1=top.to_string() x2=left.to_string() y2=bottom.to_string() />
            <line class="chart-axis" x1=left.to_string() y1=bottom.to_string() x2=right.to_string() y2=bottom.to_string() />
            {y_labels}
            {x_labels}
        </g>
    }
    .into_any()
}
