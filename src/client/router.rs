use dioxus::prelude::*;
use dioxus::router::Navigator;
use dioxus_logger::tracing;

use heimdall::auth::guard::RedirectSink;

use crate::client::{
    components::{dashboard::DashboardLayout, Navbar},
    routes::{dashboard::Dashboard, Home, NotFound},
};

use crate::client::routes::NotFound as DashboardNotFound;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]

    #[route("/")]
    Home {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },

    #[end_layout]

    #[nest("/dashboard")]

        #[layout(DashboardLayout)]

        #[route("/")]
        Dashboard {},

        #[route("/:..segments")]
        DashboardNotFound { segments: Vec<String> },
}

/// Redirect sink backed by the router's navigator.
///
/// Uses `replace` rather than `push` so a denied navigation attempt does
/// not land in the history stack.
pub struct NavigatorRedirect {
    nav: Navigator,
}

impl NavigatorRedirect {
    pub fn new(nav: Navigator) -> Self {
        Self { nav }
    }
}

impl RedirectSink<Route> for NavigatorRedirect {
    fn redirect(&self, target: Route) {
        tracing::debug!(to = ?target, "redirecting");

        let _ = self.nav.replace(target);
    }
}
