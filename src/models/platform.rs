use serde::Serialize;

/// Operating system of the machine running the explorer, not of the container engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HostPlatform {
    Linux,
    Windows,
    MacOs,
    Other,
}

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(target_os = "linux") {
            HostPlatform::Linux
        } else if cfg!(target_os = "windows") {
            HostPlatform::Windows
        } else if cfg!(target_os = "macos") {
            HostPlatform::MacOs
        } else {
            HostPlatform::Other
        }
    }

    pub fn is_linux(&self) -> bool {
        *self == HostPlatform::Linux
    }
}
