use crate::domain::value::Money;

/// Wallet balance returned by `GET /balance`.
///
/// `raw` is the response body exactly as received. `balance` and `currency` are typed views
/// of the documented fields; each is `None` when the field is missing or has another type.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceResponse {
    pub balance: Option<Money>,
    pub currency: Option<String>,
    pub raw: serde_json::Value,
}
