use crate::domain::{AppError, TunnelRequest};

/// Port onto the external Sauce Connect tunnel manager.
///
/// Process supervision, port readiness, and reconnection all live behind
/// this interface; this crate only issues open and close requests.
pub trait TunnelManager {
    /// Open (or reuse) a tunnel for the given credentials and options.
    fn open_connection(&self, request: &TunnelRequest) -> Result<(), AppError>;

    /// Close all tunnels opened for the given username. Closing when none
    /// is open is a no-op.
    fn close_tunnels_for_plan(&self, username: &str) -> Result<(), AppError>;
}

/// Tunnel manager that fulfills every request without side effects.
///
/// Used where tunnel management is out of scope, such as the preview CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopTunnelManager;

impl TunnelManager for NoopTunnelManager {
    fn open_connection(&self, _request: &TunnelRequest) -> Result<(), AppError> {
        Ok(())
    }

    fn close_tunnels_for_plan(&self, _username: &str) -> Result<(), AppError> {
        Ok(())
    }
}
