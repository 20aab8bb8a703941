use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("proxy is not bound to the bus; call initialize() first")]
    NotInitialized,
    #[error("proxy is already bound to the bus")]
    AlreadyInitialized,
    /// The transport reported a failure. Carried unchanged; callers decide
    /// what to do with it.
    #[error("remote call failed: {0}")]
    RemoteCall(#[from] zbus::Error),
    /// A configured call deadline elapsed before the reply arrived.
    #[error("remote call exceeded the configured deadline of {0:?}")]
    CallTimeout(Duration),
}
