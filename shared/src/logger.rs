use crate::error::{Error, ErrorCode, Result};
use crate::models::VoteRecord;

/// Marker left in the endpoint setting until a real URL is pasted in.
pub const PLACEHOLDER_MARKER: &str = "PEGA_TU_URL_DE_APPS_SCRIPT_AQUI";

pub const PAYLOAD_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Fire-and-forget destination for accepted votes.
///
/// Implementations must not block and must not report back into the tally;
/// failures are theirs to log.
pub trait VoteSink {
    fn submit(&self, record: VoteRecord);
}

/// Returns the usable endpoint URL, or a `Misconfigured` error when it is
/// missing, blank, or still the placeholder.
pub fn resolve_endpoint(url: Option<&str>) -> Result<&str> {
    match url.map(str::trim) {
        None | Some("") => Err(Error::misconfigured("Vote log endpoint is not configured")),
        Some(u) if u.contains(PLACEHOLDER_MARKER) => {
            Err(Error::with_details(ErrorCode::Misconfigured, "Vote log endpoint is a placeholder", u))
        }
        Some(u) => Ok(u),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Color, LoggerAck};

    #[test]
    fn rejects_missing_and_placeholder_endpoints() {
        for url in [None, Some(""), Some("   "), Some("https://script.google.com/macros/s/PEGA_TU_URL_DE_APPS_SCRIPT_AQUI/exec")] {
            let err = resolve_endpoint(url).unwrap_err();
            assert_eq!(err.code, ErrorCode::Misconfigured);
        }
        assert_eq!(resolve_endpoint(Some(" https://example.org/log ")).unwrap(), "https://example.org/log");
    }

    #[test]
    fn payload_uses_question_field() {
        let record = VoteRecord { category: Category::Atencion, color: Color::Yellow };
        assert_eq!(record.to_payload().unwrap(), r#"{"question":"atencion","color":"yellow"}"#);
    }

    #[test]
    fn ack_tolerates_extra_fields() {
        let ack: LoggerAck = serde_json::from_str(r#"{"result":"success","message":"Voto registrado"}"#).unwrap();
        assert_eq!(ack.message, "Voto registrado");
        let ack: LoggerAck = serde_json::from_str(r#"{"result":"success"}"#).unwrap();
        assert!(ack.message.is_empty());
    }
}
