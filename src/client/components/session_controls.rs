use dioxus::prelude::*;

use heimdall::auth::session::SessionHandle;

use crate::client::store::session::SessionState;

/// Login/logout buttons mutating the session flag.
///
/// Both paths update the store mirror alongside the handle so conditional
/// rendering follows the flag without waiting on the simulated check.
#[component]
pub fn SessionControls() -> Element {
    let session = use_context::<SessionHandle>();
    let mut state = use_context::<Signal<SessionState>>();

    let login_session = session.clone();
    let logout_session = session;

    rsx!(
        div { class: "flex gap-2",
            if state.read().active {
                button {
                    class: "btn btn-outline",
                    onclick: move |_| {
                        logout_session.logout();
                        state.write().active = false;
                    },
                    "Logout"
                }
            } else {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        login_session.login();
                        state.write().active = true;
                    },
                    "Login"
                }
            }
        }
    )
}
