//! Transport layer: URL, query and method assembly plus wire-format decoding.

mod dispatch;
mod json;
mod path;
mod query;
mod scalar;
mod xml;

pub use dispatch::{FORM_CONTENT_TYPE, Method, build_request};
pub use path::ResponseFormat;

use json::decode_recording_json_response;
use xml::decode_xml_response;

use crate::domain::Payload;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid XML response: {0}")]
    Xml(#[from] quick_xml::DeError),

    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response body is not UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Decode `body` according to the format the request asked for.
///
/// Audio is only passed through on a 2xx status; error bodies from the media endpoint are
/// XML like everything else.
pub fn decode_response(
    format: ResponseFormat,
    status: u16,
    body: Vec<u8>,
) -> Result<Payload, TransportError> {
    match format {
        ResponseFormat::Audio if (200..=299).contains(&status) => {
            if body.is_empty() {
                Ok(Payload::Empty)
            } else {
                Ok(Payload::Audio(body))
            }
        }
        ResponseFormat::Audio | ResponseFormat::Xml => decode_xml_response(&body),
        ResponseFormat::Json => decode_recording_json_response(&body),
    }
}
