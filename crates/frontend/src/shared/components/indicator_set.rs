use super::card_animated::CardAnimated;
use super::card_title::CardTitle;
use super::stat_card::StatCard;
use contracts::shared::indicators::IndicatorSet;
use leptos::prelude::*;

#[component]
pub fn IndicatorSetView(
    /// Title, icon, column count and tiles
    #[prop(into)]
    set: Signal<IndicatorSet>,
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let cols_class = move || match set.with(|s| s.columns) {
        2 => "indicator-set__grid indicator-set__grid--cols-2",
        3 => "indicator-set__grid indicator-set__grid--cols-3",
        _ => "indicator-set__grid indicator-set__grid--cols-4",
    };

    let cards = move || {
        set.get()
            .tiles
            .into_iter()
            .map(|tile| view! { <StatCard tile=tile /> })
            .collect_view()
    };

    view! {
        <CardAnimated delay_ms=delay_ms>
            <div class="indicator-set">
                <CardTitle
                    title=Signal::derive(move || set.with(|s| s.label.clone()))
                    icon_name=Signal::derive(move || Some(set.with(|s| s.icon.clone())))
                />
                <div class=cols_class>
                    {cards}
                </div>
            </div>
        </CardAnimated>
    }
}
