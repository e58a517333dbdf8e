//! Client-side route protection demo.
//!
//! This library holds the route-protection core consumed by the Dioxus
//! client: a session state holder with a simulated asynchronous
//! authorization check, and a navigation gate that permits or denies entry
//! to the protected route. The UI layer lives in the binary; nothing in
//! here depends on a renderer, so the gate can be driven directly from
//! tests or wired to a real backend check later.

pub mod auth;
pub mod config;
pub mod error;
