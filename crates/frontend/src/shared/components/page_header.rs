use leptos::prelude::*;

/// Centered page title with a row of controls underneath
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: String,

    /// Controls rendered below the title (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1 class="page-header__title">{title}</h1>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
