//! Transport layer: wire-format details (serialization/deserialization).

mod balance;
mod dispatch;
mod error_body;
mod money;

pub use balance::decode_balance_json_response;
pub use dispatch::{decode_dispatch_json_response, encode_dispatch_body};
pub use error_body::decode_api_error_message;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
