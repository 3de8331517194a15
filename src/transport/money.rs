use serde_json::value::RawValue;

use crate::domain::Money;

/// Money-like value returned by GateWire as either JSON number or JSON string.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`10.50` remains `"10.50"` instead of becoming `"10.5"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportMoney(String);

impl TransportMoney {
    /// Read a money token; any JSON type other than string or number yields `None`.
    pub fn from_raw(raw: &RawValue) -> Option<Self> {
        let token = raw.get().trim();
        match token.as_bytes().first().copied() {
            Some(b'"') => serde_json::from_str::<String>(token).ok().map(Self),
            Some(b'-' | b'0'..=b'9') => Some(Self(token.to_owned())),
            _ => None,
        }
    }
}

impl From<TransportMoney> for Money {
    fn from(value: TransportMoney) -> Self {
        Money::from_raw(value.0)
    }
}
