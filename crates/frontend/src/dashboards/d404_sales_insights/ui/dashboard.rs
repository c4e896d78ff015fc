use super::{MainTrendChart, PerformanceInsights, SalesBreakdownChart};
use crate::shared::components::indicator_set::IndicatorSetView;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Select;
use contracts::dashboards::d404_sales_insights::{
    dashboard_view, DashboardConfig, SalesRecordStore, SelectionState,
};
use contracts::shared::error::DashboardError;
use leptos::prelude::*;

fn load() -> Result<(SalesRecordStore, DashboardConfig), DashboardError> {
    let config = DashboardConfig::load()?;
    let store = SalesRecordStore::mock()?;
    Ok((store, config))
}

/// Sales Insights Dashboard component
#[component]
pub fn SalesInsightsDashboard() -> impl IntoView {
    match load() {
        Ok((store, config)) => view! { <DashboardBody store=store config=config /> }.into_any(),
        Err(err) => {
            log::error!("Failed to initialise D404 dashboard: {}", err);
            view! {
                <div id="d404_sales_insights--dashboard" class="d404-error">
                    <strong>"⚠ Error: "</strong>
                    {err.to_string()}
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn DashboardBody(store: SalesRecordStore, config: DashboardConfig) -> impl IntoView {
    log::info!("D404 dashboard mounted with {} months", store.len());

    let title = config.title.clone();
    let placeholder = config.month_placeholder.clone();

    let selection = RwSignal::new(SelectionState::with_metric(config.default_metric));
    let store = StoredValue::new(store);
    let config = StoredValue::new(config);

    // Re-derived on every selection change
    let view_model = Memo::new(move |_| {
        selection.with(|sel| {
            store.with_value(|store| config.with_value(|config| dashboard_view(store, sel, config)))
        })
    });

    let on_month_change = Callback::new(move |month: String| {
        log::debug!("D404 month selected: {}", month);
        selection.update(|s| s.set_month(month));
    });

    view! {
        <div id="d404_sales_insights--dashboard" class="d404-dashboard">
            <PageHeader title=title>
                <Select
                    id="d404-month"
                    value=Signal::derive(move || view_model.with(|v| v.month_value.clone()))
                    on_change=on_month_change
                    options=Signal::derive(move || view_model.with(|v| v.month_options.clone()))
                    placeholder=placeholder
                />
            </PageHeader>

            <PerformanceInsights
                banner=Signal::derive(move || view_model.with(|v| v.insight.clone()))
                delay_ms=0
            />

            <IndicatorSetView
                set=Signal::derive(move || view_model.with(|v| v.indicators.clone()))
                delay_ms=80
            />

            <SalesBreakdownChart
                chart=Signal::derive(move || view_model.with(|v| v.breakdown.clone()))
                delay_ms=160
            />

            <MainTrendChart
                chart=Signal::derive(move || view_model.with(|v| v.trend.clone()))
                delay_ms=240
            />
        </div>
    }
}
