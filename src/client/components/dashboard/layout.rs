use dioxus::prelude::*;

use heimdall::auth::guard::{GateDecision, RouteGuard};
use heimdall::auth::session::SessionHandle;

use crate::client::components::dashboard::DashboardNavbar;
use crate::client::router::{NavigatorRedirect, Route};

/// Guard layout wrapping every route nested under the dashboard.
///
/// Mounting this layout is the navigation attempt: the gate runs once per
/// entry, and while its check is pending a skeleton is rendered in place of
/// the protected content. On deny the gate has already redirected, so
/// nothing is rendered at all.
#[component]
pub fn DashboardLayout() -> Element {
    let session = use_context::<SessionHandle>();
    let nav = navigator();

    let decision = use_resource(move || {
        let session = session.clone();
        let redirects = NavigatorRedirect::new(nav.clone());

        async move {
            RouteGuard::new(session, Route::Home {})
                .can_enter(&redirects)
                .await
        }
    });

    match &*decision.read_unchecked() {
        Some(GateDecision::Permitted) => rsx! {
            DashboardNavbar {  }

            Outlet::<Route> {}
        },
        Some(GateDecision::Denied) => rsx! {},
        None => rsx! {
            main { class: "page flex items-center justify-center",
                div { class: "flex flex-col items-center gap-2",
                    div {
                        class: "skeleton skeleton-card"
                    }
                    p { class: "text-sm",
                        "Checking session..."
                    }
                }
            }
        },
    }
}
