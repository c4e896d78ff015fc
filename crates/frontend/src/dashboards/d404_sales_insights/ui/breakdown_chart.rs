use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::card_title::CardTitle;
use crate::shared::components::charts::BarChart;
use contracts::dashboards::d404_sales_insights::widgets::BreakdownChart;
use leptos::prelude::*;

#[component]
pub fn SalesBreakdownChart(
    /// Height and fill are read once at mount
    #[prop(into)]
    chart: Signal<BreakdownChart>,
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let (height, fill) = chart.with_untracked(|c| (c.height, c.fill.clone()));

    view! {
        <CardAnimated delay_ms=delay_ms>
            <CardTitle
                title=Signal::derive(move || chart.with(|c| c.title.clone()))
                icon_name=Signal::derive(move || Some(chart.with(|c| c.icon.clone())))
            />
            <BarChart
                layout=Signal::derive(move || chart.with(|c| c.layout.clone()))
                height=height
                fill=fill
            />
        </CardAnimated>
    }
}
