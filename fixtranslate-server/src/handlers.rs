/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/8/26
******************************************************************************/

//! Request handlers.
//!
//! `/parse` is deliberately forgiving about request shape, since log
//! shippers wrap the raw message differently: a JSON object with a `raw`,
//! `log`, or `message` key, a Datadog-style `{"attributes": {"message":
//! ...}}` envelope, a JSON array of any of those, or a plain-text body.
//! Results with only non-fatal errors return 200 with the errors in the
//! body; a fatal (empty-message) result maps to 400.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use fixtranslate_parser::{ParseOptions, parse_with};
use fixtranslate_tagvalue::normalize_delimiters;
use serde_json::{Value, json};
use tracing::info;

/// Liveness probe.
pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok", "service": "fixtranslate"}))
}

/// `POST /parse`: one message (or an array of them) in, ParseResult JSON out.
pub async fn parse_endpoint(body: Bytes) -> Response {
    info!(bytes = body.len(), "incoming /parse request");

    let messages = extract_messages(&body);
    if messages.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "no raw message found in request"})),
        )
            .into_response();
    }

    let translated: Vec<(Value, bool)> = messages.iter().map(|raw| translate(raw)).collect();
    let all_fatal = translated.iter().all(|(_, fatal)| *fatal);
    let status = if all_fatal {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::OK
    };

    let mut results: Vec<Value> = translated.into_iter().map(|(value, _)| value).collect();
    let payload = if results.len() > 1 {
        Value::Array(results)
    } else {
        results.remove(0)
    };
    (status, Json(payload)).into_response()
}

/// `POST /parse/batch`: `{"raws": [...]}` in, array of ParseResult JSON out.
pub async fn parse_batch(Json(payload): Json<Value>) -> Response {
    let raws: Vec<String> = payload
        .get("raws")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    info!(count = raws.len(), "incoming /parse/batch request");

    let out: Vec<Value> = raws.iter().map(|raw| translate(raw).0).collect();
    Json(Value::Array(out)).into_response()
}

/// Runs one message through the translator and attaches the human renderings.
fn translate(raw: &str) -> (Value, bool) {
    let dict = fixtranslate_dictionary::global();
    let normalized = normalize_delimiters(raw.as_bytes());
    let result = parse_with(&normalized, &ParseOptions::new(), dict);

    let fatal = result.is_fatal();
    let summary = result.summary(dict);
    let detail = result.detail(dict);
    let mut value = serde_json::to_value(&result).unwrap_or_else(|_| json!({}));
    // Render the raw line with the visible delimiter convention, as the
    // original copy of the message may have carried unprintable SOH bytes.
    value["raw"] = Value::String(result.raw.replace('\u{0001}', "|"));
    value["summary"] = Value::String(summary);
    value["detail"] = Value::String(detail);
    (value, fatal)
}

/// Pulls zero or more raw messages out of a lenient request body.
fn extract_messages(body: &[u8]) -> Vec<String> {
    let mut messages = Vec::new();

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Array(entries)) => {
            for entry in entries {
                match entry {
                    Value::Object(_) => {
                        if let Some(raw) = raw_of(&entry) {
                            messages.push(raw);
                        }
                    }
                    Value::String(s) => push_text(&mut messages, &s),
                    _ => {}
                }
            }
        }
        Ok(value @ Value::Object(_)) => {
            if let Some(attributes) = value.get("attributes").and_then(Value::as_object) {
                if let Some(raw) = attributes
                    .get("message")
                    .or_else(|| attributes.get("log"))
                    .and_then(Value::as_str)
                {
                    push_text(&mut messages, raw);
                }
            } else if let Some(raw) = raw_of(&value) {
                messages.push(raw);
            }
        }
        Ok(Value::String(s)) => push_text(&mut messages, &s),
        _ => {
            let text = String::from_utf8_lossy(body);
            push_text(&mut messages, &text);
        }
    }

    messages
}

/// Looks a raw message up under the keys log shippers commonly use.
fn raw_of(entry: &Value) -> Option<String> {
    ["raw", "log", "message"]
        .iter()
        .find_map(|key| entry.get(*key).and_then(Value::as_str))
        .map(|s| s.trim_end_matches(['\r', '\n']).to_string())
}

fn push_text(messages: &mut Vec<String>, text: &str) {
    let trimmed = text.trim_end_matches(['\r', '\n']);
    if !trimmed.is_empty() {
        messages.push(trimmed.to_string());
    }
}
