pub mod packet;
pub mod socket;

pub use packet::*;
pub use socket::*;

use std::io;

/// Returned by [`ProbeResult::ttl`] when the host is judged unreachable.
pub const UNREACHABLE_TTL: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeResult {
    pub round_trip_ms: f64,
    pub ttl: i32,
    pub reachable: bool,
}

impl ProbeResult {
    pub fn reachable(round_trip_ms: f64, ttl: i32) -> Self {
        Self {
            round_trip_ms,
            ttl,
            reachable: true,
        }
    }

    pub fn unreachable(round_trip_ms: f64) -> Self {
        Self {
            round_trip_ms,
            ttl: UNREACHABLE_TTL,
            reachable: false,
        }
    }
}

#[derive(Debug)]
pub enum ProbeError {
    Connection(io::Error),
    Write(io::Error),
}

impl std::fmt::Display for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProbeError::Connection(e) => write!(f, "Failed to connect: {}", e),
            ProbeError::Write(e) => write!(f, "Failed to send echo request: {}", e),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProbeError::Connection(e) | ProbeError::Write(e) => Some(e),
        }
    }
}
