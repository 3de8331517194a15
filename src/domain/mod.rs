//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Dispatch, Priority};
pub use response::BalanceResponse;
pub use validation::ValidationError;
pub use value::{ApiKey, BaseUrl, MessageText, Money, PhoneNumber, RawPhoneNumber, TemplateKey};
