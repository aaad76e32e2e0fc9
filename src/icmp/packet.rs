use byteorder::{BigEndian, ByteOrder, ReadBytesExt};
use std::io::Cursor;

pub const ICMP_ECHO_REQUEST: u8 = 8;
pub const ICMP_ECHO_REPLY: u8 = 0;
pub const ICMP_TIME_EXCEEDED: u8 = 11;

/// Code sent with every request. RFC 792 uses 0.
pub const ECHO_REQUEST_CODE: u8 = 1;

pub const HEADER_LEN: usize = 8;

/*
    0                   1                   2                   3
    0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
   |     Type      |     Code      |          Checksum             |
   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
   |           Identifier          |        Sequence Number        |
   +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
*/
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoMessage {
    pub icmp_type: u8,
    pub code: u8,
    pub checksum: u16,
    pub identifier: u16,
    pub sequence: u16,
}

impl EchoMessage {
    /// Build the request for a dotted-decimal target. The identifier and
    /// sequence number are the first and second octets of the address.
    pub fn for_target(target: &str) -> Self {
        let mut octets = target.split('.');
        let identifier = parse_octet(octets.next());
        let sequence = parse_octet(octets.next());

        Self {
            icmp_type: ICMP_ECHO_REQUEST,
            code: ECHO_REQUEST_CODE,
            checksum: 0,
            identifier,
            sequence,
        }
    }

    pub fn from_bytes(data: &[u8]) -> anyhow::Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(anyhow::anyhow!("ICMP packet too short: {} bytes", data.len()));
        }

        let mut cursor = Cursor::new(data);
        Ok(Self {
            icmp_type: cursor.read_u8()?,
            code: cursor.read_u8()?,
            checksum: cursor.read_u16::<BigEndian>()?,
            identifier: cursor.read_u16::<BigEndian>()?,
            sequence: cursor.read_u16::<BigEndian>()?,
        })
    }

    /// Serialize the header followed by `payload_len` zero bytes, with the
    /// checksum computed over the whole buffer and written back in.
    pub fn to_bytes(&mut self, payload_len: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; HEADER_LEN + payload_len];
        self.write_header(&mut bytes[..HEADER_LEN]);

        self.compute_checksum(&bytes);

        self.write_header(&mut bytes[..HEADER_LEN]);
        bytes
    }

    /// Checksum `data` and remember the result in `self.checksum`.
    pub fn compute_checksum(&mut self, data: &[u8]) -> u16 {
        self.checksum = internet_checksum(data);
        self.checksum
    }

    fn write_header(&self, buf: &mut [u8]) {
        buf[0] = self.icmp_type;
        buf[1] = self.code;
        BigEndian::write_u16(&mut buf[2..4], self.checksum);
        BigEndian::write_u16(&mut buf[4..6], self.identifier);
        BigEndian::write_u16(&mut buf[6..8], self.sequence);
    }
}

// Decimal integer truncated to 16 bits; anything unparsable becomes 0.
fn parse_octet(octet: Option<&str>) -> u16 {
    match octet.map(str::parse::<i64>) {
        Some(Ok(value)) => value as u16,
        Some(Err(e)) => {
            log::debug!("Non-numeric address octet {:?}: {}", octet, e);
            0
        }
        None => 0,
    }
}

/// RFC 1071 checksum. The carry out of the low 16 bits is folded back once.
pub fn internet_checksum(data: &[u8]) -> u16 {
    let mut sum: u32 = 0;

    let mut words = data.chunks_exact(2);
    for word in &mut words {
        sum += BigEndian::read_u16(word) as u32;
    }

    // Odd trailing byte is the high half of a zero-padded word
    if let [last] = words.remainder() {
        sum += (*last as u32) << 8;
    }

    sum += sum >> 16;

    !(sum as u16)
}

/// True when `data`, checksum field included, sums to all-ones.
pub fn verify_checksum(data: &[u8]) -> bool {
    internet_checksum(data) == 0
}
