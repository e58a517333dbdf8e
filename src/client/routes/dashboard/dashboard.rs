use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaLock, FaLockOpen};
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::store::session::SessionState;

#[component]
pub fn Dashboard() -> Element {
    rsx!(
        Title { "Dashboard | Heimdall" }
        Meta {
            name: "description",
            content: "Demonstration of client-side route protection for Dioxus single-page applications."
        }
        Page { class: "flex flex-col items-center",
            div { class: "content-row",
                SessionCard { }
            }
        }
    )
}

#[component]
pub fn SessionCard() -> Element {
    let state = use_context::<Signal<SessionState>>();

    rsx!(
        div {
            class: "card",
            div {
                class: "card-body",
                h2 {
                    class: "card-title",
                    "Session"
                }
                div { class: "flex flex-col justify-center items-center gap-2 p-2",
                    if state.read().active {
                        Icon {
                            width: 32,
                            height: 32,
                            icon: FaLockOpen
                        }
                        p {
                            "Your session is active. This page is only reachable while the session
                            flag is set; the gate re-checks it on every navigation here."
                        }
                    } else {
                        Icon {
                            width: 32,
                            height: 32,
                            icon: FaLock
                        }
                        p {
                            "Session ended. You can keep reading, but the gate will deny your next
                            visit and send you back home."
                        }
                    }
                }
            }
        }
    )
}
