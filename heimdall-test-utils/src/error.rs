use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Error(#[from] heimdall::error::Error),
    #[error(transparent)]
    AuthError(#[from] heimdall::error::auth::AuthError),
    #[error(transparent)]
    ConfigError(#[from] heimdall::error::config::ConfigError),
}
