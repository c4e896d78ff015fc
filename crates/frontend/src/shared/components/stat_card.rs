use crate::shared::icons::icon;
use contracts::shared::indicators::IndicatorTile;
use leptos::prelude::*;

/// Single indicator tile: icon, label and the pre-formatted value
#[component]
pub fn StatCard(tile: IndicatorTile) -> impl IntoView {
    let icon_class = format!("stat-card__icon {}", tile.tone.css_class());

    view! {
        <div class="stat-card" data-indicator=tile.id.0.clone()>
            <div class=icon_class>
                {icon(&tile.icon)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{tile.label}</div>
                <div class="stat-card__value">{tile.display}</div>
            </div>
        </div>
    }
}
