use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The asynchronous session check did not complete.
    ///
    /// The simulated check never produces this; the variant exists so the
    /// gate's contract covers a real backend call that can fail.
    #[error("Session check failed: {0}")]
    CheckFailed(String),
}
