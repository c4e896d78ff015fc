//! Thaw `Card` that fades in when mounted.
//!
//! The `card-appear` keyframes live in `styles/dashboard.css`. Cards rendered
//! one after another pass increasing `delay_ms` values for a staggered entry:
//!
//! ```ignore
//! <CardAnimated delay_ms=0>   // first card
//! <CardAnimated delay_ms=80>  // second card
//! <CardAnimated class="insight-banner" delay_ms=160>
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes for the card body.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "dashboard-card".to_string()
    } else {
        format!("dashboard-card {}", class)
    };

    view! {
        <Card attr:style=style>
            <div class=class>
                {children()}
            </div>
        </Card>
    }
}
