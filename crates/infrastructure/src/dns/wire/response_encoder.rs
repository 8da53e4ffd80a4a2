use super::header::{HeaderFlags, MessageHeader, HEADER_LEN};
use super::message_decoder::DecodedQuery;
use super::name::{encode_domain, is_encodable};
use std::net::Ipv6Addr;
use zonerelay_domain::{RecordType, ANSWER_TTL};

const CLASS_IN: u16 = 1;

/// Builds the authoritative reply for `query`, decoded from `request`, from a
/// zone value.
///
/// The question section and the answer's owner name are the request's own
/// QNAME bytes whenever the question was complete; a truncated question is
/// re-encoded from the decoded name.
///
/// The answer section carries one record whose TYPE/CLASS follow the queried
/// type. When the type is not one the zone answers, or `value` cannot be
/// encoded as that type, the answer section is left empty (NODATA) and
/// ANCOUNT is 0. A byte sequence is always produced.
pub fn build_authoritative_response(
    request: &[u8],
    query: &DecodedQuery,
    value: &str,
) -> Vec<u8> {
    let answer = RecordType::from_u16(query.qtype)
        .and_then(|record_type| encode_rdata(record_type, value).map(|rdata| (record_type, rdata)));

    let header = MessageHeader {
        id: query.header.id,
        flags: HeaderFlags::response(),
        qdcount: 1,
        ancount: answer.is_some() as u16,
        nscount: 0,
        arcount: 0,
    };

    let qname = request_qname(request, query)
        .map(<[u8]>::to_vec)
        .unwrap_or_else(|| encode_domain(&query.domain));
    let answer_len = answer
        .as_ref()
        .map_or(0, |(_, rdata)| qname.len() + 10 + rdata.len());

    let mut buf = Vec::with_capacity(12 + qname.len() + 4 + answer_len);
    buf.extend_from_slice(&header.to_bytes());

    buf.extend_from_slice(&qname);
    buf.extend_from_slice(&query.qtype.to_be_bytes());
    buf.extend_from_slice(&query.qclass.to_be_bytes());

    if let Some((record_type, rdata)) = answer {
        buf.extend_from_slice(&qname);
        buf.extend_from_slice(&type_and_class(record_type));
        buf.extend_from_slice(&ANSWER_TTL.to_be_bytes());
        buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(&rdata);
    }

    buf
}

/// The QNAME exactly as the client sent it, type and class excluded.
fn request_qname<'a>(request: &'a [u8], query: &DecodedQuery) -> Option<&'a [u8]> {
    if !query.question_complete {
        return None;
    }
    request.get(HEADER_LEN..query.question_end.checked_sub(4)?)
}

fn type_and_class(record_type: RecordType) -> [u8; 4] {
    let [t0, t1] = record_type.to_u16().to_be_bytes();
    let [c0, c1] = CLASS_IN.to_be_bytes();
    [t0, t1, c0, c1]
}

fn encode_rdata(record_type: RecordType, value: &str) -> Option<Vec<u8>> {
    match record_type {
        RecordType::A => encode_ipv4_components(value),
        RecordType::AAAA => value
            .parse::<Ipv6Addr>()
            .ok()
            .map(|addr| addr.octets().to_vec()),
        RecordType::CNAME => is_encodable(value).then(|| encode_domain(value)),
    }
}

/// One octet per dot-separated decimal component; exactly four components,
/// each 0-255.
fn encode_ipv4_components(value: &str) -> Option<Vec<u8>> {
    let octets = value
        .split('.')
        .map(|part| part.parse::<u8>().ok())
        .collect::<Option<Vec<u8>>>()?;
    (octets.len() == 4).then_some(octets)
}
