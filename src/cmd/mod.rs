pub mod classify;
pub mod firmware;
pub mod resolve;

use std::net::SocketAddr;

/// Client address used when none is given on the command line
pub const DEFAULT_CLIENT: &str = "0.0.0.0:0";

pub fn parse_client(s: &str) -> Result<SocketAddr, String> {
    s.parse()
        .map_err(|e| format!("invalid client address {:?}: {}", s, e))
}
