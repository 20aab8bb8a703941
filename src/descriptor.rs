//! Static identity of the remote service and its callable surface.

/// Which message bus a service is reachable on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusKind {
    System,
    Session,
}

/// Compile-time identity of a remote D-Bus service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceDescriptor {
    pub bus: BusKind,
    /// Well-known bus name the service claims
    pub service: &'static str,
    pub interface: &'static str,
    pub path: &'static str,
}

/// A remote method together with its D-Bus type signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodDescriptor {
    pub name: &'static str,
    pub input_signature: &'static str,
    pub output_signature: &'static str,
}

pub const CONSOLE_KIT_SERVICE: &str = "org.freedesktop.ConsoleKit";
pub const CONSOLE_KIT_MANAGER_INTERFACE: &str = "org.freedesktop.ConsoleKit.Manager";
pub const CONSOLE_KIT_MANAGER_PATH: &str = "/org/freedesktop/ConsoleKit/Manager";

/// The ConsoleKit Manager service this crate proxies.
pub const CONSOLE_KIT_MANAGER: ServiceDescriptor = ServiceDescriptor {
    bus: BusKind::System,
    service: CONSOLE_KIT_SERVICE,
    interface: CONSOLE_KIT_MANAGER_INTERFACE,
    path: CONSOLE_KIT_MANAGER_PATH,
};

/// The complete callable surface of the Manager interface. The proxy trait in
/// [`crate::proxy`] is declared from exactly this set; nothing is discovered
/// at runtime.
pub const CONSOLE_KIT_MANAGER_METHODS: [MethodDescriptor; 4] = [
    MethodDescriptor {
        name: "CanRestart",
        input_signature: "",
        output_signature: "b",
    },
    MethodDescriptor {
        name: "CanStop",
        input_signature: "",
        output_signature: "b",
    },
    MethodDescriptor {
        name: "Restart",
        input_signature: "",
        output_signature: "",
    },
    MethodDescriptor {
        name: "Stop",
        input_signature: "",
        output_signature: "",
    },
];
