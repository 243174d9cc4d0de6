//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::{login::LoginPage, register::RegisterPage, submit_job::SubmitJobPage};
use crate::routes::{HOME, LOGIN, REGISTER};
use crate::state::session::SessionStore;
use crate::util::storage::{BrowserStorage, DurableStorage};

/// Session value both renders start from.
///
/// The server has no `localStorage`, so reading it here would make the first
/// client render disagree with the SSR markup. The persisted token is applied
/// by an effect once the app is mounted.
pub fn initial_session(storage: Arc<dyn DurableStorage>, config: &ClientConfig) -> SessionStore {
    SessionStore::unloaded(storage, config)
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the client config and a logged-out session to every page, then
/// loads the persisted token after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let session = RwSignal::new(initial_session(Arc::new(BrowserStorage), &config));

    // Effects only run in the browser, after the hydrated DOM is in place.
    Effect::new(move |_| session.update(SessionStore::load));

    provide_context(config);
    provide_context(session);

    view! {
        <Title text="Image Jobs"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment(HOME.segment()) view=SubmitJobPage/>
                <Route path=StaticSegment(LOGIN.segment()) view=LoginPage/>
                <Route path=StaticSegment(REGISTER.segment()) view=RegisterPage/>
            </Routes>
        </Router>
    }
}
