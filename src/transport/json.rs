use serde::Deserialize;

use super::TransportError;
use super::scalar::JsonScalar;
use crate::domain::resource::Recording;
use crate::domain::{Payload, Resource, RestException};

/// Body of `GET .../Recordings/{Sid}.json`: either a recording or an error object.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RecordingJsonResponse {
    // error object
    code: Option<u32>,
    message: Option<String>,
    more_info: Option<String>,
    status: Option<JsonScalar>,

    sid: Option<String>,
    account_sid: Option<String>,
    call_sid: Option<String>,
    duration: Option<JsonScalar>,
    channels: Option<JsonScalar>,
    source: Option<String>,
    price: Option<JsonScalar>,
    price_unit: Option<String>,
    date_created: Option<String>,
    date_updated: Option<String>,
    api_version: Option<String>,
    uri: Option<String>,
}

impl RecordingJsonResponse {
    fn into_payload(self) -> Payload {
        let status = self.status.map(JsonScalar::into_string);

        if let Some(code) = self.code {
            return Payload::Exception(RestException {
                code,
                detail: self.message.unwrap_or_default(),
                more_info: self.more_info,
                status: status.and_then(|status| status.parse().ok()),
            });
        }

        Payload::Resource(Resource::Recording(Recording {
            sid: self.sid,
            account_sid: self.account_sid,
            call_sid: self.call_sid,
            duration: self.duration.map(JsonScalar::into_string),
            channels: self.channels.map(JsonScalar::into_string),
            status,
            source: self.source,
            price: self.price.map(JsonScalar::into_string),
            price_unit: self.price_unit,
            date_created: self.date_created,
            date_updated: self.date_updated,
            api_version: self.api_version,
            uri: self.uri,
        }))
    }
}

pub fn decode_recording_json_response(body: &[u8]) -> Result<Payload, TransportError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Payload::Empty);
    }
    let parsed: RecordingJsonResponse = serde_json::from_slice(body)?;
    Ok(parsed.into_payload())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_recording_metadata() {
        let json = r#"{
            "sid": "RE1",
            "account_sid": "AC1",
            "call_sid": "CA1",
            "duration": "6",
            "channels": 1,
            "status": "completed",
            "source": "OutboundAPI",
            "price": -0.0025,
            "price_unit": "USD",
            "date_created": "Fri, 14 Oct 2016 21:56:34 +0000",
            "uri": "/2010-04-01/Accounts/AC1/Recordings/RE1.json",
            "encryption_details": null,
            "subresource_uris": {}
        }"#;

        let Payload::Resource(Resource::Recording(recording)) =
            decode_recording_json_response(json.as_bytes()).unwrap()
        else {
            panic!("expected recording");
        };
        assert_eq!(recording.sid.as_deref(), Some("RE1"));
        assert_eq!(recording.duration.as_deref(), Some("6"));
        assert_eq!(recording.channels.as_deref(), Some("1"));
        assert_eq!(recording.price.as_deref(), Some("-0.0025"));
        assert_eq!(recording.status.as_deref(), Some("completed"));
        assert_eq!(recording.date_updated, None);
    }

    #[test]
    fn decodes_error_object() {
        let json = r#"{
            "code": 20404,
            "message": "The requested resource was not found",
            "more_info": "https://www.twilio.com/docs/errors/20404",
            "status": 404
        }"#;

        assert_eq!(
            decode_recording_json_response(json.as_bytes()).unwrap(),
            Payload::Exception(RestException {
                code: 20404,
                detail: "The requested resource was not found".to_owned(),
                more_info: Some("https://www.twilio.com/docs/errors/20404".to_owned()),
                status: Some(404),
            })
        );
    }

    #[test]
    fn empty_body_is_empty_payload() {
        assert_eq!(decode_recording_json_response(b"").unwrap(), Payload::Empty);
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            decode_recording_json_response(b"{\"sid\": "),
            Err(TransportError::Json(_))
        ));
    }
}
