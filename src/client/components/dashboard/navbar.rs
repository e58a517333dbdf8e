use dioxus::prelude::*;

use heimdall::auth::session::SessionHandle;

use crate::client::components::HeimdallTitleButton;
use crate::client::store::session::SessionState;

#[component]
pub fn DashboardNavbar() -> Element {
    let session = use_context::<SessionHandle>();
    let mut state = use_context::<Signal<SessionState>>();

    rsx! {
        div {
            class: "navbar",
            div {
                class: "navbar-start",
                HeimdallTitleButton {}

            }
            div {
                class: "navbar-end",
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        session.logout();
                        state.write().active = false;
                    },
                    "Logout"
                }
            }
        }
    }
}
