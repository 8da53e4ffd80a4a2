use super::header::{MessageHeader, HEADER_LEN};
use super::name::decode_name;
use zonerelay_domain::DomainError;

/// The header and first question of an incoming datagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedQuery {
    pub header: MessageHeader,
    /// Labels joined with `.`, no trailing dot, case preserved.
    pub domain: String,
    pub qtype: u16,
    pub qclass: u16,
    /// False when the name or the QTYPE/QCLASS pair was cut short; `qtype`
    /// and `qclass` are then 0.
    pub question_complete: bool,
    /// Offset just past the part of the question that could be read.
    pub question_end: usize,
}

/// Decodes the header and the first question of `buf`.
///
/// Only a buffer shorter than the fixed header is an error; a truncated
/// question yields whatever part of the name could be read.
pub fn decode_query(buf: &[u8]) -> Result<DecodedQuery, DomainError> {
    let header = MessageHeader::parse(buf)?;
    let name = decode_name(buf, HEADER_LEN);

    let mut query = DecodedQuery {
        header,
        domain: name.name,
        qtype: 0,
        qclass: 0,
        question_complete: false,
        question_end: name.end,
    };

    if name.terminated && name.end + 4 <= buf.len() {
        let pos = name.end;
        query.qtype = u16::from_be_bytes([buf[pos], buf[pos + 1]]);
        query.qclass = u16::from_be_bytes([buf[pos + 2], buf[pos + 3]]);
        query.question_complete = true;
        query.question_end = pos + 4;
    }

    Ok(query)
}
