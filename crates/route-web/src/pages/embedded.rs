//! Embedded View

use leptos::prelude::*;

use super::WidgetView;

/// Widget without page chrome, for iframes on third-party sites
#[component]
pub fn EmbeddedView() -> impl IntoView {
    view! {
        <div class="embedded">
            <WidgetView />
        </div>
    }
}
