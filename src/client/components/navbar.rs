use dioxus::prelude::*;

pub use crate::client::router::Route;

use crate::client::components::SessionControls;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "Heimdall"
                    }
                    p { class: "text-xs",
                        "v0.1.0-Alpha.1"
                    }
                }
            }
            div {
                class: "navbar-end",
                SessionControls {  }
            }
        }

        Outlet::<Route> {}
    }
}
