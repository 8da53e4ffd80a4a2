use zonerelay_domain::DomainError;

/// Fixed size of the message header.
pub const HEADER_LEN: usize = 12;

pub const OPCODE_QUERY: u8 = 0;
pub const OPCODE_IQUERY: u8 = 1;
pub const OPCODE_STATUS: u8 = 2;
pub const RCODE_NO_ERROR: u8 = 0;

/// The 16-bit flags word: `QR | OPCODE(4) | AA | TC | RD | RA | Z(3) | RCODE(4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderFlags {
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: u8,
    pub rcode: u8,
}

impl HeaderFlags {
    /// QR=response, standard query, no error, every other bit clear.
    pub fn response() -> Self {
        Self {
            qr: true,
            opcode: OPCODE_QUERY,
            rcode: RCODE_NO_ERROR,
            ..Self::default()
        }
    }

    pub fn pack(&self) -> u16 {
        (self.qr as u16) << 15
            | ((self.opcode & 0x0F) as u16) << 11
            | (self.aa as u16) << 10
            | (self.tc as u16) << 9
            | (self.rd as u16) << 8
            | (self.ra as u16) << 7
            | ((self.z & 0x07) as u16) << 4
            | (self.rcode & 0x0F) as u16
    }

    pub fn unpack(word: u16) -> Self {
        Self {
            qr: word & 0x8000 != 0,
            opcode: ((word >> 11) & 0x0F) as u8,
            aa: word & 0x0400 != 0,
            tc: word & 0x0200 != 0,
            rd: word & 0x0100 != 0,
            ra: word & 0x0080 != 0,
            z: ((word >> 4) & 0x07) as u8,
            rcode: (word & 0x0F) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MessageHeader {
    pub id: u16,
    pub flags: HeaderFlags,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl MessageHeader {
    pub fn parse(buf: &[u8]) -> Result<Self, DomainError> {
        if buf.len() < HEADER_LEN {
            return Err(DomainError::MalformedPacket(format!(
                "{} bytes is shorter than the {}-byte header",
                buf.len(),
                HEADER_LEN
            )));
        }

        let word = |at: usize| u16::from_be_bytes([buf[at], buf[at + 1]]);

        Ok(Self {
            id: word(0),
            flags: HeaderFlags::unpack(word(2)),
            qdcount: word(4),
            ancount: word(6),
            nscount: word(8),
            arcount: word(10),
        })
    }

    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        out[0..2].copy_from_slice(&self.id.to_be_bytes());
        out[2..4].copy_from_slice(&self.flags.pack().to_be_bytes());
        out[4..6].copy_from_slice(&self.qdcount.to_be_bytes());
        out[6..8].copy_from_slice(&self.ancount.to_be_bytes());
        out[8..10].copy_from_slice(&self.nscount.to_be_bytes());
        out[10..12].copy_from_slice(&self.arcount.to_be_bytes());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_flags_word() {
        assert_eq!(HeaderFlags::response().pack(), 0x8000);
    }

    #[test]
    fn test_pack_places_every_field() {
        let flags = HeaderFlags {
            qr: true,
            opcode: OPCODE_STATUS,
            aa: true,
            tc: false,
            rd: true,
            ra: true,
            z: 0,
            rcode: 3,
        };
        // 1 0010 1 0 1 | 1 000 0011
        assert_eq!(flags.pack(), 0b1001_0101_1000_0011);
        assert_eq!(HeaderFlags::unpack(flags.pack()), flags);
    }

    #[test]
    fn test_pack_masks_oversized_fields() {
        let flags = HeaderFlags {
            opcode: 0xFF,
            z: 0xFF,
            rcode: 0xFF,
            ..HeaderFlags::default()
        };
        assert_eq!(flags.pack(), 0x787F);
    }

    #[test]
    fn test_unpack_standard_query_with_rd() {
        let flags = HeaderFlags::unpack(0x0100);
        assert!(!flags.qr);
        assert_eq!(flags.opcode, OPCODE_QUERY);
        assert!(flags.rd);
        assert_ne!(OPCODE_IQUERY, flags.opcode);
    }

    #[test]
    fn test_parse_rejects_short_buffer() {
        let result = MessageHeader::parse(&[0u8; 11]);
        assert!(matches!(result, Err(DomainError::MalformedPacket(_))));
    }

    #[test]
    fn test_parse_and_serialize() {
        let raw = [
            0xAB, 0xCD, 0x01, 0x20, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01,
        ];
        let header = MessageHeader::parse(&raw).unwrap();
        assert_eq!(header.id, 0xABCD);
        assert!(header.flags.rd);
        assert_eq!(header.flags.z, 2);
        assert_eq!(header.qdcount, 1);
        assert_eq!(header.arcount, 1);
        assert_eq!(header.to_bytes(), raw);
    }
}
