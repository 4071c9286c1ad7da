//! UI Components

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use route_core::{routes, Resolved, Result, RouteError, RouteTable, View};

use crate::pages::{AboutView, EmbeddedView, HomeView, WidgetView};

/// Mount state of the view at the current location
#[derive(Clone, Debug, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready(View),
    Failed { message: String, retryable: bool },
    Missing,
}

impl LoadState {
    /// State known without fetching anything
    fn initial(table: &RouteTable, location: &str) -> Self {
        match table.match_location(location) {
            None => Self::Missing,
            Some(entry) => table
                .peek(&entry.name)
                .map_or(Self::Loading, |resolved| Self::Ready(resolved.view())),
        }
    }

    /// State after a resolution attempt
    fn settled(location: &str, result: Result<Resolved<'_>>) -> Self {
        match result {
            Ok(resolved) => Self::Ready(resolved.view()),
            Err(RouteError::NoMatch(_)) => Self::Missing,
            Err(e) => {
                tracing::warn!(location, error = %e, "Route failed to load");
                Self::Failed {
                    message: e.user_message(),
                    retryable: e.is_retryable(),
                }
            }
        }
    }
}

/// Top navigation, hrefs built from route names
#[component]
pub fn NavBar() -> impl IntoView {
    let table = expect_context::<Arc<RouteTable>>();
    let links: Vec<(String, &'static str)> = [
        (routes::HOME, "Widget"),
        (routes::EMBEDDED, "Embedded"),
        (routes::ORIGINAL_HOME, "Home"),
        (routes::ABOUT, "About"),
    ]
    .into_iter()
    .filter_map(|(name, label)| table.href(name).ok().map(|href| (href, label)))
    .collect();

    view! {
        <nav class="nav">
            {links
                .into_iter()
                .map(|(href, label)| view! { <a href=href>{label}</a> })
                .collect_view()}
        </nav>
    }
}

/// Renders whatever the route table maps the browser location to
#[component]
pub fn RouteOutlet() -> impl IntoView {
    let location = use_location();

    move || {
        let path = location.pathname.get();
        view! { <RouteView location=path /> }
    }
}

/// Mounts the view the table resolves `location` to
///
/// Every view is compiled into the main bundle. The chunk a lazy route
/// fetches is only checked and kept resident, its bytes are never
/// executed, so "lazy" here means rendering waits until the fetch has
/// succeeded. Resident views render straight away and unmatched locations
/// render [`NotFound`].
#[component]
pub fn RouteView(location: String) -> impl IntoView {
    let table = expect_context::<Arc<RouteTable>>();
    let initial = LoadState::initial(&table, &location);
    let pending = initial == LoadState::Loading;
    let (state, set_state) = signal(initial);

    let load = move || {
        let table = Arc::clone(&table);
        let location = location.clone();
        leptos::task::spawn_local(async move {
            let next = LoadState::settled(&location, table.resolve_location(&location).await);
            set_state.set(next);
        });
    };
    if pending {
        load();
    }

    let retry = Callback::new(move |()| {
        set_state.set(LoadState::Loading);
        load();
    });

    move || match state.get() {
        LoadState::Loading => view! { <p class="loading">"Loading..."</p> }.into_any(),
        LoadState::Ready(target) => render(target),
        LoadState::Failed { message, retryable } => {
            let retry = retryable.then_some(retry);
            view! { <LoadError message=message retry=retry /> }.into_any()
        }
        LoadState::Missing => view! { <NotFound /> }.into_any(),
    }
}

fn render(target: View) -> AnyView {
    match target {
        View::Widget => view! { <WidgetView /> }.into_any(),
        View::Embedded => view! { <EmbeddedView /> }.into_any(),
        View::Home => view! { <HomeView /> }.into_any(),
        View::About => view! { <AboutView /> }.into_any(),
    }
}

/// Shown when a lazy view could not be fetched
#[component]
pub fn LoadError(message: String, retry: Option<Callback<()>>) -> impl IntoView {
    view! {
        <div class="load-error" role="alert">
            <p>{message}</p>
            {retry.map(|retry| view! {
                <button class="btn" on:click=move |_| retry.run(())>"Retry"</button>
            })}
        </div>
    }
}

/// Shown for paths no route matches
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Page not found"</h1>
        </div>
    }
}
