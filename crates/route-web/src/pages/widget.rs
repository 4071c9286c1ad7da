//! Widget View
//!
//! The primary view, served at `/` and again at `/widget`.

use leptos::prelude::*;

#[component]
pub fn WidgetView() -> impl IntoView {
    let (count, set_count) = signal(0u32);

    view! {
        <section class="widget">
            <h1>"Widget"</h1>
            <p class="count">{move || count.get()}</p>
            <div class="actions">
                <button class="btn btn-primary" on:click=move |_| set_count.update(|n| *n += 1)>
                    "+1"
                </button>
                <button class="btn" on:click=move |_| set_count.set(0)>
                    "Reset"
                </button>
            </div>
        </section>
    }
}
