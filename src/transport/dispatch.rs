use serde::Serialize;

use super::TransportError;
use crate::domain::Dispatch;

/// JSON body of `POST /dispatch`.
///
/// Absent values are skipped entirely: the API treats a present `null` differently from a
/// missing key.
#[derive(Debug, Serialize)]
struct DispatchPayload<'a> {
    phone: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    template_key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<WirePriority>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum WirePriority {
    High,
}

impl<'a> From<&'a Dispatch> for DispatchPayload<'a> {
    fn from(request: &'a Dispatch) -> Self {
        Self {
            phone: request.phone().raw(),
            message: request.message_text().map(|it| it.as_str()),
            template_key: request.template_key().map(|it| it.as_str()),
            priority: request
                .priority_route()
                .is_high()
                .then_some(WirePriority::High),
        }
    }
}

pub fn encode_dispatch_body(request: &Dispatch) -> Result<Vec<u8>, TransportError> {
    Ok(serde_json::to_vec(&DispatchPayload::from(request))?)
}

/// The dispatch result has no fixed schema; the parsed body is handed back untouched.
pub fn decode_dispatch_json_response(body: &[u8]) -> Result<serde_json::Value, TransportError> {
    Ok(serde_json::from_slice(body)?)
}
