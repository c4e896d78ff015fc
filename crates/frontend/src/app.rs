use crate::dashboards::SalesInsightsDashboard;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <main class="app-main">
                <SalesInsightsDashboard />
            </main>
        </ConfigProvider>
    }
}
