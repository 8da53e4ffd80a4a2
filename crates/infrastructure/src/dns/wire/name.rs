/// Longest label a length octet can describe without colliding with the
/// compression-pointer bits.
pub const MAX_LABEL_LEN: usize = 63;

/// Encodes `domain` as a label sequence terminated by the zero octet.
///
/// Empty labels (leading, doubled or trailing dots) are skipped, and a label
/// longer than 63 bytes is cut at 63.
pub fn encode_domain(domain: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(domain.len() + 2);
    for label in domain.split('.').filter(|label| !label.is_empty()) {
        let bytes = &label.as_bytes()[..label.len().min(MAX_LABEL_LEN)];
        out.push(bytes.len() as u8);
        out.extend_from_slice(bytes);
    }
    out.push(0);
    out
}

/// True when every label of `domain` fits in one length octet.
pub fn is_encodable(domain: &str) -> bool {
    !domain.is_empty()
        && domain
            .split('.')
            .filter(|label| !label.is_empty())
            .all(|label| label.len() <= MAX_LABEL_LEN)
}

/// Outcome of [`decode_name`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedName {
    pub name: String,
    /// Offset just past the terminating zero octet, or where decoding stopped.
    pub end: usize,
    /// False when the buffer ran out (or a pointer was met) before the zero octet.
    pub terminated: bool,
}

/// Reads a label sequence starting at `start`.
///
/// Decoding stops without error when a label would run past the end of the
/// buffer or a compression pointer / extended label type is met; whatever was
/// read up to that point is returned.
pub fn decode_name(buf: &[u8], start: usize) -> DecodedName {
    let mut name = String::new();
    let mut pos = start;

    while pos < buf.len() {
        let len = buf[pos] as usize;
        if len == 0 {
            return DecodedName {
                name,
                end: pos + 1,
                terminated: true,
            };
        }
        if len & 0xC0 != 0 || pos + 1 + len > buf.len() {
            break;
        }
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(&String::from_utf8_lossy(&buf[pos + 1..pos + 1 + len]));
        pos += 1 + len;
    }

    DecodedName {
        name,
        end: pos,
        terminated: false,
    }
}
