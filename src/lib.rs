//! Single-shot ICMP echo probe over a raw IPv4 socket.
//!
//! [`ping`] sends one 40-byte echo request and reports the round-trip time,
//! the TTL of the reply and whether the host answered within a second.
//! Opening raw sockets usually requires root or `CAP_NET_RAW`.

pub mod dns;
pub mod icmp;

pub use icmp::{ping, ProbeError, ProbeResult};
