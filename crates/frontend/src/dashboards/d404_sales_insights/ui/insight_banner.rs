use crate::shared::components::card_animated::CardAnimated;
use crate::shared::icons::icon;
use contracts::dashboards::d404_sales_insights::widgets::InsightBanner;
use leptos::prelude::*;

/// Banner highlighting the recommended metric of the active month
#[component]
pub fn PerformanceInsights(
    #[prop(into)]
    banner: Signal<InsightBanner>,
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let content = move || {
        let banner = banner.get();
        let rec = banner.recommendation;
        let icon_class = format!("insight-banner__icon {}", rec.tone.css_class());

        view! {
            <div class=icon_class>{icon(&rec.icon)}</div>
            <div class="insight-banner__text">
                <h3 class="insight-banner__label">{rec.label}</h3>
                <p class="insight-banner__description">{rec.description}</p>
                <p class="insight-banner__value">{banner.value_text}</p>
            </div>
        }
    };

    view! {
        <CardAnimated class="insight-banner" delay_ms=delay_ms>
            <div class="insight-banner__body">{content}</div>
        </CardAnimated>
    }
}
