//! Custom extractors that reject with the failure envelope.

mod user_id;
mod validated_json;

pub use user_id::UserId;
pub use validated_json::ValidatedJson;
