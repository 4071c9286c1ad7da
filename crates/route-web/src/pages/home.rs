//! Home View

use leptos::prelude::*;

#[component]
pub fn HomeView() -> impl IntoView {
    view! {
        <div class="home">
            <header class="hero">
                <h1>"Widget"</h1>
                <p class="tagline">"A small widget you can host anywhere"</p>
            </header>

            <section class="features">
                <div class="feature">
                    <h3>"Standalone"</h3>
                    <p>"Open the widget on its own page."</p>
                </div>
                <div class="feature">
                    <h3>"Embeddable"</h3>
                    <p>"Drop the embedded view into an iframe on any site."</p>
                </div>
            </section>
        </div>
    }
}
