use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::session::SessionState;

#[component]
pub fn DashboardButton() -> Element {
    let state = use_context::<Signal<SessionState>>();

    rsx!(
        ul { class: "flex items-center gap-2",
            li {
                Link {
                    to: Route::Dashboard {},
                    class: "btn btn-primary w-48",
                    "Go to Dashboard"
                }
            }
            if state.read().active {
                li {
                    p { class: "text-sm",
                        "Session active"
                    }
                }
            } else {
                li {
                    p { class: "text-sm",
                        "No active session"
                    }
                }
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Heimdall Home" }
        Meta {
            name: "description",
            content: "Demonstration of client-side route protection for Dioxus single-page applications."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                div { class: "flex items-center gap-2",
                    p { class: "text-2xl",
                        "Heimdall"
                    }
                    p {
                        "v0.1.0-Alpha.1"
                    }
                }
                div {
                    DashboardButton { }
                }
                div { class: "flex flex-col gap-2 px-4 max-w-256",
                    p { class: "font-bold text-center",
                        "This is a demonstration of client-side route protection"
                    }
                    p {
                        "The dashboard route is protected by a navigation gate. Entering it triggers a
                        simulated session check that resolves after a short delay, standing in for the
                        round trip a real authorization call would make. While the check is pending a
                        placeholder is shown; once it resolves you are either let through or sent back
                        here."
                    }
                    p {
                        "Use the Login button in the navbar, then open the dashboard. Log out and try
                        again to see the gate deny access and redirect. Nothing is persisted: reloading
                        the page resets the session flag."
                    }
                    ul { class: "list-disc pl-6",
                        li { "Login: sets the in-memory session flag" }
                        li { "Logout: clears it" }
                        li { "Dashboard: only reachable while the flag is set" }
                    }
                }
            }
        }
    )
}
