use crate::shared::icons::icon;
use leptos::prelude::*;

/// Select component with an optional placeholder.
///
/// The placeholder is shown while `value` is empty and cannot be picked again
/// once a real option has been chosen.
#[component]
pub fn Select(
    /// Current value ("" = nothing selected)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the chosen option's value
    on_change: Callback<String>,
    /// Option values, shown as their own labels
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Text shown while nothing is selected
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group form__select-wrapper">
            <select
                id=select_id
                class="form__select"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || placeholder.get().map(|text| view! {
                    <option value="" disabled=true hidden=true selected=move || value.get().is_empty()>
                        {text}
                    </option>
                })}
                <For
                    each=move || options.get()
                    key=|val| val.clone()
                    children=move |val| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        let val_attr = val.clone();
                        view! {
                            <option value=val_attr selected=is_selected>
                                {val}
                            </option>
                        }
                    }
                />
            </select>
            <span class="form__select-chevron">{icon("chevron-down")}</span>
        </div>
    }
}
