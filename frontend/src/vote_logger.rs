use gloo_net::http::Request;
use shared::logger::{resolve_endpoint, PAYLOAD_CONTENT_TYPE};
use shared::{Error, LoggerAck, Result, VoteRecord, VoteSink};
use tracing::{error, info};

/// Posts each accepted vote to the spreadsheet web app. Nothing here feeds
/// back into the tally.
pub struct HttpVoteLogger {
    endpoint: Option<String>,
}

impl HttpVoteLogger {
    pub fn new(endpoint: Option<String>) -> Self {
        Self { endpoint }
    }
}

impl VoteSink for HttpVoteLogger {
    fn submit(&self, record: VoteRecord) {
        let url = match resolve_endpoint(self.endpoint.as_deref()) {
            Ok(url) => url.to_owned(),
            Err(e) => {
                error!("Vote not sent to log: {}", e);
                return;
            }
        };

        wasm_bindgen_futures::spawn_local(async move {
            match send_record(&url, record).await {
                Ok(ack) => info!(question = %record.category, color = %record.color, "Vote logged: {}", ack.message),
                Err(e) => error!(question = %record.category, color = %record.color, "Failed to log vote: {}", e),
            }
        });
    }
}

async fn send_record(url: &str, record: VoteRecord) -> Result<LoggerAck> {
    // text/plain keeps this a simple CORS request with no preflight.
    let response = Request::post(url)
        .header("Content-Type", PAYLOAD_CONTENT_TYPE)
        .body(record.to_payload()?)
        .send()
        .await
        .map_err(|e| Error::remote("Request failed", e.to_string()))?;

    if !response.ok() {
        return Err(Error::remote("Endpoint returned an error", format!("HTTP {}", response.status())));
    }

    response.json::<LoggerAck>().await
        .map_err(|e| Error::remote("Failed to parse acknowledgement", e.to_string()))
}
