use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::card_title::CardTitle;
use crate::shared::components::charts::LineChart;
use contracts::dashboards::d404_sales_insights::widgets::TrendChart;
use leptos::prelude::*;

/// "{month} Sales Metrics" card with the selected metric of the active month
#[component]
pub fn MainTrendChart(
    #[prop(into)]
    chart: Signal<TrendChart>,
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let (height, stroke, active_dot_radius) =
        chart.with_untracked(|c| (c.height, c.stroke.clone(), c.active_dot_radius));

    view! {
        <CardAnimated delay_ms=delay_ms>
            <CardTitle title=Signal::derive(move || chart.with(|c| c.title.clone())) />
            <LineChart
                layout=Signal::derive(move || chart.with(|c| c.layout.clone()))
                height=height
                stroke=stroke
                series=Signal::derive(move || chart.with(|c| c.series.clone()))
                active_dot_radius=active_dot_radius
            />
        </CardAnimated>
    }
}
