//! About View

use leptos::prelude::*;

#[component]
pub fn AboutView() -> impl IntoView {
    view! {
        <div class="about">
            <h1>"About"</h1>
            <p>
                "This page is fetched the first time you visit it and stays loaded afterwards."
            </p>
        </div>
    }
}
