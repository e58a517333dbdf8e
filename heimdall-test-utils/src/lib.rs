//! Test support for the Heimdall route-protection core.
//!
//! Provides a declarative [`TestBuilder`] for configuring session state,
//! doubles for the gate's collaborators ([`StubCheck`],
//! [`RecordingRedirects`]), and the [`TestRoute`] fixture route table used
//! in place of the client's real one.

pub mod builder;
pub mod check;
pub mod context;
pub mod error;
pub mod model;
pub mod redirect;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        check::StubCheck, model::TestRoute, redirect::RecordingRedirects, TestBuilder,
        TestContext, TestError,
    };
}
