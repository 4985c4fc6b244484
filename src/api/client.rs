//! The send lifecycle: one GET per click, wall-clock timing, body read as
//! text, lenient JSON interpretation.

use serde_json::Value;

use super::error::RequestError;

/// Status recorded when the request never produced an HTTP response.
pub const STATUS_TRANSPORT_FAILURE: u16 = 0;

/// Everything the response panel needs from one completed send.
///
/// Exactly one of body/error is populated; status and duration are always
/// recorded together, with duration measured up to the failure point on
/// transport errors.
#[derive(Debug, Clone)]
pub struct DebugReport {
    pub status: u16,
    pub duration_ms: u32,
    pub outcome: RequestOutcome,
}

#[derive(Debug, Clone)]
pub enum RequestOutcome {
    /// The request completed. `None` means an empty body ("no data").
    Body(Option<Value>),
    Failed(RequestError),
}

impl DebugReport {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn body(&self) -> Option<&Value> {
        match &self.outcome {
            RequestOutcome::Body(value) => value.as_ref(),
            RequestOutcome::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&RequestError> {
        match &self.outcome {
            RequestOutcome::Body(_) => None,
            RequestOutcome::Failed(err) => Some(err),
        }
    }
}

/// Issue a single GET against `url` and fold the result into a report.
///
/// No retry, no queuing, no timeout beyond what the browser's fetch stack
/// enforces. Callers keep at most one request in flight per widget.
pub async fn send_debug_request(url: &str) -> DebugReport {
    log::debug!("sending request to {url}");
    let started = now_ms();

    match fetch_text(url).await {
        Ok((status, raw)) => {
            let duration_ms = elapsed_since(started);
            log::debug!("response status {status} after {duration_ms}ms");
            let outcome = match interpret_body(&raw) {
                Ok(body) => {
                    if body.is_none() {
                        log::warn!("empty response body");
                    }
                    RequestOutcome::Body(body)
                }
                Err(err) => {
                    log::error!("{err}");
                    RequestOutcome::Failed(err)
                }
            };
            DebugReport {
                status,
                duration_ms,
                outcome,
            }
        }
        Err(err) => {
            let duration_ms = elapsed_since(started);
            log::error!("{err}");
            DebugReport {
                status: STATUS_TRANSPORT_FAILURE,
                duration_ms,
                outcome: RequestOutcome::Failed(err),
            }
        }
    }
}

async fn fetch_text(url: &str) -> Result<(u16, String), RequestError> {
    let response = reqwest::Client::new()
        .get(url)
        .header(reqwest::header::ACCEPT, "application/json")
        .send()
        .await
        .map_err(|e| RequestError::transport(e.to_string()))?;

    let status = response.status().as_u16();
    let raw = response
        .text()
        .await
        .map_err(|e| RequestError::transport(e.to_string()))?;
    Ok((status, raw))
}

/// Lenient body interpretation: empty after trimming is "no data", anything
/// else must parse as JSON.
pub fn interpret_body(raw: &str) -> Result<Option<Value>, RequestError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(trimmed)
        .map(Some)
        .map_err(|e| RequestError::invalid_body(e.to_string()))
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_default()
}

fn elapsed_since(started: f64) -> u32 {
    round_duration(started, now_ms())
}

/// Whole-millisecond round trip between two `performance.now()` readings.
fn round_duration(started: f64, finished: f64) -> u32 {
    (finished - started).max(0.0).round() as u32
}
