use dioxus::prelude::*;
use dioxus_logger::tracing;

use heimdall::auth::session::SessionHandle;
use heimdall::config::AppConfig;

use crate::client::router::Route;
use crate::client::store::session::SessionState;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_hook(|| match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "invalid configuration, falling back to defaults");

            AppConfig::default()
        }
    });

    // The session handle is the authoritative flag; the store is a mirror
    // for rendering only.
    use_context_provider(|| SessionHandle::new(config.check_latency));
    use_context_provider(|| Signal::new(SessionState::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}
