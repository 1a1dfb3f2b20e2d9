use std::sync::Mutex;

use crate::domain::{AppError, TunnelRequest};
use crate::ports::TunnelManager;

/// Tunnel manager fake recording open and close requests.
#[derive(Default)]
pub struct FakeTunnelManager {
    pub opened: Mutex<Vec<TunnelRequest>>,
    pub closed: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeTunnelManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// A manager whose open and close requests always fail.
    pub fn failing() -> Self {
        Self { fail: true, ..Self::default() }
    }
}

impl TunnelManager for FakeTunnelManager {
    fn open_connection(&self, request: &TunnelRequest) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Tunnel("connection refused".to_string()));
        }
        self.opened.lock().unwrap().push(request.clone());
        Ok(())
    }

    fn close_tunnels_for_plan(&self, username: &str) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Tunnel("tunnel already gone".to_string()));
        }
        self.closed.lock().unwrap().push(username.to_string());
        Ok(())
    }
}
