/// Inputs for a Sauce Connect open request, handed to the tunnel manager.
///
/// The tunnel manager owns everything past this point: process supervision,
/// readiness handling, and reuse of already-open tunnels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunnelRequest {
    /// Plan identity; close requests are keyed by this username.
    pub username: String,
    pub access_key: String,
    /// Local port the tunnel listens on.
    pub port: u16,
    /// Extra command-line options passed through verbatim.
    pub options: Option<String>,
    /// Protocol override for the tunnel endpoint.
    pub protocol: Option<String>,
}
