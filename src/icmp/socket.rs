use socket2::{Domain, Protocol, Socket, Type};
use std::io::{self, Read};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

use crate::dns;
use crate::icmp::packet::{EchoMessage, HEADER_LEN, ICMP_TIME_EXCEEDED};
use crate::icmp::{ProbeError, ProbeResult};

pub const PAYLOAD_LEN: usize = 32;
pub const READ_TIMEOUT: Duration = Duration::from_secs(5);
/// Replies slower than this count as lost.
pub const MAX_ROUND_TRIP_MS: f64 = 1000.0;

/// Assumed IPv4 header length in front of every reply. Options are not handled.
pub const IP_HEADER_LEN: usize = 20;
const IP_TTL_OFFSET: usize = 8;
const REPLY_BUFFER_LEN: usize = IP_HEADER_LEN + HEADER_LEN + PAYLOAD_LEN;

/// The operations a probe needs from its connection.
pub trait ProbeConnection {
    fn remote_addr(&self) -> Ipv4Addr;
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
    fn set_read_timeout(&mut self, timeout: Duration) -> io::Result<()>;
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// Raw IPv4 ICMP socket connected to a single host. Closed on drop.
pub struct RawConnection {
    socket: Socket,
    remote: Ipv4Addr,
}

impl RawConnection {
    pub fn dial(host: &str) -> Result<Self, ProbeError> {
        // The resolver's error chain stays reachable through `io::Error::get_ref`
        let remote = dns::resolve_ipv4(host)
            .map_err(|e| ProbeError::Connection(io::Error::new(io::ErrorKind::NotFound, e)))?;

        let socket = Socket::new(Domain::IPV4, Type::RAW, Some(Protocol::ICMPV4)).map_err(|e| {
            log::debug!("Failed to create raw socket: {}. Root privileges may be required.", e);
            ProbeError::Connection(e)
        })?;

        socket.set_nonblocking(false).map_err(ProbeError::Connection)?;

        let addr = SocketAddr::new(IpAddr::V4(remote), 0);
        socket.connect(&addr.into()).map_err(ProbeError::Connection)?;
        log::debug!("Raw ICMP socket connected to {}", remote);

        Ok(Self { socket, remote })
    }
}

impl ProbeConnection for RawConnection {
    fn remote_addr(&self) -> Ipv4Addr {
        self.remote
    }

    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.socket.send(buf)
    }

    fn set_read_timeout(&mut self, timeout: Duration) -> io::Result<()> {
        self.socket.set_read_timeout(Some(timeout))
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.socket.read(buf)
    }
}

/// Send one echo request to `host` and wait for the reply.
///
/// Only failing to open the socket or to send the request is an error. A
/// missing, late or foreign reply yields an unreachable [`ProbeResult`].
pub fn ping(host: &str) -> Result<ProbeResult, ProbeError> {
    let mut conn = RawConnection::dial(host)?;
    execute_probe(&mut conn)
}

pub fn execute_probe<C: ProbeConnection>(conn: &mut C) -> Result<ProbeResult, ProbeError> {
    let remote = conn.remote_addr();
    let mut request = EchoMessage::for_target(&remote.to_string());
    let packet = request.to_bytes(PAYLOAD_LEN);

    let start_time = Instant::now();

    log::debug!("Sending ICMP packet to {}: {} bytes", remote, packet.len());
    conn.write(&packet).map_err(ProbeError::Write)?;

    // Without a timeout the read below may block indefinitely
    if let Err(e) = conn.set_read_timeout(READ_TIMEOUT) {
        log::warn!("Failed to set read timeout on connection to {}: {}", remote, e);
    }

    let mut buffer = [0u8; REPLY_BUFFER_LEN];
    let read = conn.read(&mut buffer);
    let elapsed_ms = start_time.elapsed().as_secs_f64() * 1000.0;

    match &read {
        Ok(n) => log::debug!("Received {} bytes from {} after {:.3}ms", n, remote, elapsed_ms),
        Err(e) => log::debug!("No reply from {} after {:.3}ms: {}", remote, elapsed_ms, e),
    }

    Ok(judge_reply(&packet, &buffer, read.is_ok(), elapsed_ms))
}

/// Decide reachability from the request sent and the buffer read back.
pub fn judge_reply(request: &[u8], reply: &[u8], received: bool, elapsed_ms: f64) -> ProbeResult {
    let icmp = reply.get(IP_HEADER_LEN..).unwrap_or_default();
    let (Ok(sent), Ok(header)) = (EchoMessage::from_bytes(request), EchoMessage::from_bytes(icmp))
    else {
        return ProbeResult::unreachable(elapsed_ms);
    };

    log::debug!(
        "Reply header: type={} code={} id={} seq={}",
        header.icmp_type,
        header.code,
        header.identifier,
        header.sequence
    );

    let same_echo = header.identifier == sent.identifier && header.sequence == sent.sequence;
    let time_exceeded = header.icmp_type == ICMP_TIME_EXCEEDED;

    if !received || !same_echo || elapsed_ms >= MAX_ROUND_TRIP_MS || time_exceeded {
        return ProbeResult::unreachable(elapsed_ms);
    }

    ProbeResult::reachable(elapsed_ms, reply[IP_TTL_OFFSET] as i32)
}
