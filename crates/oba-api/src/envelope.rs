// The OBA REST response envelope.
//
// Every JSON endpoint wraps its payload:
//
//   {"code": 200, "currentTime": ..., "text": "OK", "version": 2,
//    "data": {"entry": {...} | "list": [...], "references": {...}}}
//
// The server answers HTTP 200 even for logical failures, so the embedded
// `code` is authoritative. Older deployments emit `entries` where newer
// ones emit `list`. This module is the only place that sees either quirk;
// callers receive one normalized shape.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::error;

use crate::error::Error;
use crate::models::References;

// ── Normalized results ───────────────────────────────────────────────

/// A decoded `entry`-shaped response: the payload plus the shared tables
/// of cross-referenced entities (agencies, routes, stops, trips,
/// situations).
#[derive(Debug)]
pub struct EntryResult<T> {
    pub entry: T,
    pub references: References,
}

/// A decoded `list`-shaped response: the payload, the cross-reference
/// tables, and the server's paging flags.
#[derive(Debug)]
pub struct ListResult<T> {
    pub list: Vec<T>,
    pub references: References,
    /// The server truncated the result set.
    pub limit_exceeded: bool,
    /// The queried location is outside this server's coverage area.
    pub out_of_range: bool,
}

// ── Raw envelope shapes ──────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct EntryEnvelope<T> {
    code: u16,
    #[serde(default)]
    text: Option<String>,
    data: Option<EntryData<T>>,
}

#[derive(Debug, Deserialize)]
struct EntryData<T> {
    entry: T,
    #[serde(default)]
    references: References,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    code: u16,
    #[serde(default)]
    text: Option<String>,
    data: Option<ListData<T>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListData<T> {
    #[serde(alias = "entries")]
    list: Vec<T>,
    #[serde(default)]
    limit_exceeded: bool,
    #[serde(default)]
    out_of_range: bool,
    #[serde(default)]
    references: References,
}

/// Envelope with no payload at all -- submission endpoints (problem
/// reports) answer with just the status fields.
#[derive(Debug, Deserialize)]
struct BareEnvelope {
    code: u16,
    #[serde(default)]
    text: Option<String>,
}

// ── Decoding ─────────────────────────────────────────────────────────

pub(crate) fn decode_entry<T: DeserializeOwned>(body: &str) -> Result<EntryResult<T>, Error> {
    let envelope: EntryEnvelope<T> = decode_json(body)?;
    check_envelope_code(envelope.code, envelope.text)?;
    let data = envelope.data.ok_or_else(|| missing_data(body))?;
    Ok(EntryResult {
        entry: data.entry,
        references: data.references,
    })
}

pub(crate) fn decode_list<T: DeserializeOwned>(body: &str) -> Result<ListResult<T>, Error> {
    let envelope: ListEnvelope<T> = decode_json(body)?;
    check_envelope_code(envelope.code, envelope.text)?;
    let data = envelope.data.ok_or_else(|| missing_data(body))?;
    Ok(ListResult {
        list: data.list,
        references: data.references,
        limit_exceeded: data.limit_exceeded,
        out_of_range: data.out_of_range,
    })
}

pub(crate) fn decode_status(body: &str) -> Result<(), Error> {
    let envelope: BareEnvelope = decode_json(body)?;
    check_envelope_code(envelope.code, envelope.text)
}

fn decode_json<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| {
        // Decode failures are logged for diagnostics, then surfaced to the
        // caller -- never swallowed.
        error!(error = %e, "response envelope decode failed");
        Error::Deserialization {
            message: e.to_string(),
            body: body.to_owned(),
        }
    })
}

/// The embedded `code` overrides the HTTP 200 the server sent with it.
fn check_envelope_code(code: u16, text: Option<String>) -> Result<(), Error> {
    match code {
        200..=299 => Ok(()),
        404 => Err(Error::RequestNotFound),
        code => Err(Error::Api {
            code,
            message: text.unwrap_or_else(|| format!("code={code}")),
        }),
    }
}

fn missing_data(body: &str) -> Error {
    Error::Deserialization {
        message: "envelope has a success code but no data field".to_owned(),
        body: body.to_owned(),
    }
}
