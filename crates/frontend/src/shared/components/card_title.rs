use crate::shared::icons::icon;
use contracts::shared::indicators::Tone;
use leptos::prelude::*;

/// Header row of a card: optional icon followed by the title
#[component]
pub fn CardTitle(
    #[prop(into)]
    title: Signal<String>,
    /// Icon name from the icon() helper
    #[prop(into, optional)]
    icon_name: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="card-title">
            {move || icon_name.get().map(|name| view! {
                <span class=format!("card-title__icon {}", Tone::Indigo.css_class())>{icon(&name)}</span>
            })}
            <h2 class="card-title__text">{title}</h2>
        </div>
    }
}
