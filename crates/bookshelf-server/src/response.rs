//! JSON response envelope shared by every endpoint.

use serde::Serialize;

/// Envelope status for successful responses.
pub const STATUS_SUCCESS: &str = "success";
/// Envelope status for client-caused failures (4xx, plus the note-edit quirk).
pub const STATUS_FAIL: &str = "fail";
/// Envelope status for internal errors (5xx).
pub const STATUS_ERROR: &str = "error";

/// Response body shape common to all endpoints.
///
/// Every response carries a `status` of `success`, `fail`, or `error`,
/// plus an optional human-readable `message` and an optional `data`
/// payload. Absent parts are omitted from the JSON, not null.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> Envelope<T> {
    /// Success carrying only a data payload.
    pub fn data(data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: None,
            data: Some(data),
        }
    }

    /// Success carrying both a message and a data payload.
    pub fn message_and_data(message: impl Into<String>, data: T) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    /// Success carrying only a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: Some(message.into()),
            data: None,
        }
    }

    /// A `fail` or `error` envelope with a message; used by error rendering.
    pub fn failure(status: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_envelope_has_no_message_key() {
        let json = serde_json::to_value(Envelope::data(vec![1, 2, 3])).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["data"][0], 1);
        assert!(json.get("message").is_none());
    }

    #[test]
    fn test_message_envelope_has_no_data_key() {
        let json = serde_json::to_value(Envelope::message("Berhasil")).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["message"], "Berhasil");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_failure_envelope() {
        let json =
            serde_json::to_value(Envelope::failure(STATUS_FAIL, "Tidak ditemukan")).unwrap();
        assert_eq!(json["status"], "fail");
        assert_eq!(json["message"], "Tidak ditemukan");
    }
}
