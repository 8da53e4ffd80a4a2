mod record;
mod record_type;

pub use record::ZoneRecord;
pub use record_type::RecordType;

/// TTL carried by every authoritative answer.
pub const ANSWER_TTL: u32 = 60;
