//! Typed Rust client for the GateWire SMS dispatch HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for the
//! JSON wire format, and a small client layer issuing the requests. Two operations are
//! available: [`GateWireClient::dispatch`] and [`GateWireClient::get_balance`].
//!
//! ```rust,no_run
//! use gatewire::{Dispatch, GateWireClient, MessageText, RawPhoneNumber};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), gatewire::GateWireError> {
//!     let client = GateWireClient::new("sk_live_...")?;
//!     let phone = RawPhoneNumber::new("+213555000000")?;
//!     let request = Dispatch::text(phone, MessageText::new("hello")?).priority(true);
//!     let _resp = client.dispatch(request).await?;
//!
//!     let balance = client.get_balance().await?;
//!     println!("{}", balance.raw);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    GateWireClient, GateWireClientBuilder, GateWireError, HttpMethod, HttpRequest, HttpResponse,
    HttpTransport, ReqwestTransport, TransportFailure,
};
pub use domain::{
    ApiKey, BalanceResponse, BaseUrl, Dispatch, MessageText, Money, PhoneNumber, Priority,
    RawPhoneNumber, TemplateKey, ValidationError,
};
