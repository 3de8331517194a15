use serde::Deserialize;
use serde_json::Value;
use serde_json::value::RawValue;

use super::TransportError;
use super::money::TransportMoney;
use crate::domain::BalanceResponse;

/// Lenient view of the documented fields; the full body is kept separately.
#[derive(Debug, Default, Deserialize)]
struct BalanceJsonView {
    #[serde(default)]
    balance: Option<Box<RawValue>>,
    #[serde(default)]
    currency: Option<Value>,
}

/// Any JSON body is accepted. Only a body that is not JSON at all is an error.
pub fn decode_balance_json_response(body: &[u8]) -> Result<BalanceResponse, TransportError> {
    let raw: Value = serde_json::from_slice(body)?;
    let view = if raw.is_object() {
        serde_json::from_slice::<BalanceJsonView>(body).unwrap_or_default()
    } else {
        BalanceJsonView::default()
    };

    Ok(BalanceResponse {
        balance: view
            .balance
            .as_deref()
            .and_then(TransportMoney::from_raw)
            .map(Into::into),
        currency: match view.currency {
            Some(Value::String(currency)) => Some(currency),
            _ => None,
        },
        raw,
    })
}
