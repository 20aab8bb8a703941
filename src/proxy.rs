//! Generated client proxy for `org.freedesktop.ConsoleKit.Manager`.
//!
//! The method set here is the whole remote-callable surface; it mirrors
//! [`crate::descriptor::CONSOLE_KIT_MANAGER_METHODS`] one to one.

#[zbus::proxy(
    interface = "org.freedesktop.ConsoleKit.Manager",
    default_service = "org.freedesktop.ConsoleKit",
    default_path = "/org/freedesktop/ConsoleKit/Manager"
)]
pub trait ConsoleKitManager {
    fn can_restart(&self) -> zbus::Result<bool>;

    fn can_stop(&self) -> zbus::Result<bool>;

    fn restart(&self) -> zbus::Result<()>;

    fn stop(&self) -> zbus::Result<()>;
}
