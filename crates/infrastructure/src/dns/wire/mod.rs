//! DNS message wire format (RFC 1035 §4.1).

pub mod header;
pub mod message_decoder;
pub mod name;
pub mod response_encoder;

pub use header::{HeaderFlags, MessageHeader, HEADER_LEN};
pub use message_decoder::{decode_query, DecodedQuery};
pub use name::{decode_name, encode_domain};
pub use response_encoder::build_authoritative_response;
