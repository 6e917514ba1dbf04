//! Common wire types shared by all list endpoints

pub mod list_response;
pub mod numeric;
pub mod record_key;
pub mod timestamp;

// Re-exports
pub use list_response::ListResponse;
pub use record_key::RecordKey;
pub use timestamp::SaleTimestamp;
