//! Typed client proxy for the ConsoleKit session-management service.
//!
//! [`SessionControl`] turns the four remote operations of
//! `org.freedesktop.ConsoleKit.Manager` (`CanRestart`, `CanStop`, `Restart`,
//! `Stop`) into local async method calls. It performs no retries, no
//! recovery, and no interpretation of transport errors; whatever zbus
//! reports is handed to the caller unchanged.

pub mod descriptor;
pub mod error;
pub mod proxy;

use std::future::Future;
use std::time::Duration;

use tracing::debug;
use zbus::Connection;

use descriptor::{BusKind, ServiceDescriptor, CONSOLE_KIT_MANAGER};
use proxy::ConsoleKitManagerProxy;

pub use error::{Error, Result};

/// A proxy instance for the ConsoleKit Manager.
///
/// Starts out unbound; [`initialize`](Self::initialize) (or
/// [`initialize_with`](Self::initialize_with) for a caller-supplied
/// connection) moves it to bound, and there is no transition back. The bus
/// connection itself is shared process state owned by zbus; dropping this
/// value does not tear it down.
#[derive(Debug, Default)]
pub struct SessionControl {
    proxy: Option<ConsoleKitManagerProxy<'static>>,
    call_timeout: Option<Duration>,
}

impl SessionControl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap every later remote call at `limit`. Without this, timeout
    /// behavior is whatever the underlying transport does.
    pub fn with_call_timeout(mut self, limit: Duration) -> Self {
        self.call_timeout = Some(limit);
        self
    }

    /// The static identity of the service this instance proxies.
    pub fn descriptor(&self) -> &'static ServiceDescriptor {
        &CONSOLE_KIT_MANAGER
    }

    /// Open the bus named by the service descriptor and bind the proxy.
    pub async fn initialize(&mut self) -> Result<()> {
        if self.proxy.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        let connection = match CONSOLE_KIT_MANAGER.bus {
            BusKind::System => Connection::system().await?,
            BusKind::Session => Connection::session().await?,
        };
        debug!(bus = ?CONSOLE_KIT_MANAGER.bus, "opened bus connection");
        self.bind(connection).await
    }

    /// Bind the proxy over a caller-supplied connection. This is the seam
    /// for tests and for processes that already hold a bus connection.
    pub async fn initialize_with(&mut self, connection: Connection) -> Result<()> {
        if self.proxy.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        self.bind(connection).await
    }

    async fn bind(&mut self, connection: Connection) -> Result<()> {
        let proxy = ConsoleKitManagerProxy::builder(&connection)
            .build()
            .await?;
        debug!(
            interface = CONSOLE_KIT_MANAGER.interface,
            path = CONSOLE_KIT_MANAGER.path,
            "bound session-control proxy"
        );
        self.proxy = Some(proxy);
        Ok(())
    }

    /// Whether the service reports that restarting the system is permitted.
    pub async fn can_restart(&self) -> Result<bool> {
        let proxy = self.bound()?;
        self.call(proxy.can_restart()).await
    }

    /// Whether the service reports that stopping the system is permitted.
    pub async fn can_stop(&self) -> Result<bool> {
        let proxy = self.bound()?;
        self.call(proxy.can_stop()).await
    }

    /// Ask the service to restart the system. Resolves once the service
    /// acknowledges the request.
    pub async fn restart(&self) -> Result<()> {
        let proxy = self.bound()?;
        self.call(proxy.restart()).await
    }

    /// Ask the service to stop the system. Resolves once the service
    /// acknowledges the request.
    pub async fn stop(&self) -> Result<()> {
        let proxy = self.bound()?;
        self.call(proxy.stop()).await
    }

    fn bound(&self) -> Result<&ConsoleKitManagerProxy<'static>> {
        self.proxy.as_ref().ok_or(Error::NotInitialized)
    }

    async fn call<T>(&self, call: impl Future<Output = zbus::Result<T>>) -> Result<T> {
        match self.call_timeout {
            Some(limit) => match tokio::time::timeout(limit, call).await {
                Ok(reply) => Ok(reply?),
                Err(_) => Err(Error::CallTimeout(limit)),
            },
            None => Ok(call.await?),
        }
    }
}
