use std::fmt;

use crate::domain::resource::{
    Account, AvailablePhoneNumber, Call, Conference, IncomingPhoneNumber, Media, Message,
    Notification, OutgoingCallerId, Participant, Queue, QueueMember, Recording, UsageRecord,
    ValidationRequest,
};

/// Decoded answer to one request.
///
/// The HTTP status is always set, including when the client returned the envelope inside
/// [`TwilioError::Api`](crate::TwilioError::Api).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwilioResponse {
    pub status: ResponseStatus,
    pub payload: Payload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseStatus {
    /// HTTP status code received.
    pub http: u16,
    /// Twilio error code, when the body carried an exception.
    pub twilio: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Resource(Resource),
    Exception(RestException),
    /// Raw recording audio.
    Audio(Vec<u8>),
    /// No body (`204 No Content`), or a body that could not be decoded.
    Empty,
}

/// The one resource element a response carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Account(Account),
    Accounts(Vec<Account>),
    Message(Message),
    Messages(Vec<Message>),
    Media(Media),
    MediaList(Vec<Media>),
    Call(Call),
    Calls(Vec<Call>),
    Recording(Recording),
    Recordings(Vec<Recording>),
    Notification(Notification),
    Notifications(Vec<Notification>),
    OutgoingCallerId(OutgoingCallerId),
    OutgoingCallerIds(Vec<OutgoingCallerId>),
    ValidationRequest(ValidationRequest),
    IncomingPhoneNumber(IncomingPhoneNumber),
    IncomingPhoneNumbers(Vec<IncomingPhoneNumber>),
    AvailablePhoneNumbers(Vec<AvailablePhoneNumber>),
    UsageRecords(Vec<UsageRecord>),
    Queue(Queue),
    Queues(Vec<Queue>),
    QueueMember(QueueMember),
    QueueMembers(Vec<QueueMember>),
    Conference(Conference),
    Conferences(Vec<Conference>),
    Participant(Participant),
    Participants(Vec<Participant>),
}

/// Error envelope Twilio returns instead of a resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestException {
    pub code: u32,
    pub detail: String,
    /// Documentation page for `code`.
    pub more_info: Option<String>,
    /// HTTP status as reported inside the body.
    pub status: Option<u16>,
}

impl fmt::Display for RestException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.more_info {
            Some(more_info) => write!(f, "{} ({})", self.detail, more_info),
            None => f.write_str(&self.detail),
        }
    }
}

impl TwilioResponse {
    pub fn new(http: u16, payload: Payload) -> Self {
        let twilio = match &payload {
            Payload::Exception(exception) => Some(exception.code),
            _ => None,
        };
        Self {
            status: ResponseStatus { http, twilio },
            payload,
        }
    }

    pub fn resource(&self) -> Option<&Resource> {
        match &self.payload {
            Payload::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn into_resource(self) -> Option<Resource> {
        match self.payload {
            Payload::Resource(resource) => Some(resource),
            _ => None,
        }
    }

    pub fn exception(&self) -> Option<&RestException> {
        match &self.payload {
            Payload::Exception(exception) => Some(exception),
            _ => None,
        }
    }

    pub fn audio(&self) -> Option<&[u8]> {
        match &self.payload {
            Payload::Audio(bytes) => Some(bytes.as_slice()),
            _ => None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status.http)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surfaces_exception_code_on_status() {
        let exception = RestException {
            code: 20404,
            detail: "Not found".to_owned(),
            more_info: None,
            status: Some(404),
        };
        let response = TwilioResponse::new(404, Payload::Exception(exception.clone()));
        assert_eq!(response.status.http, 404);
        assert_eq!(response.status.twilio, Some(20404));
        assert_eq!(response.exception(), Some(&exception));
        assert!(response.resource().is_none());
        assert!(!response.is_success());
    }

    #[test]
    fn exception_display_includes_more_info_when_present() {
        let mut exception = RestException {
            code: 20003,
            detail: "Authentication Error".to_owned(),
            more_info: Some("https://www.example.com/errors".to_owned()),
            status: Some(401),
        };
        assert_eq!(
            exception.to_string(),
            "Authentication Error (https://www.example.com/errors)"
        );

        exception.more_info = None;
        assert_eq!(exception.to_string(), "Authentication Error");
    }

    #[test]
    fn resource_accessors_match_payload() {
        let queue = Queue {
            sid: Some("QU1".to_owned()),
            ..Default::default()
        };
        let response = TwilioResponse::new(200, Payload::Resource(Resource::Queue(queue.clone())));
        assert_eq!(response.status.twilio, None);
        assert_eq!(response.resource(), Some(&Resource::Queue(queue.clone())));
        assert_eq!(response.into_resource(), Some(Resource::Queue(queue)));

        let audio = TwilioResponse::new(200, Payload::Audio(vec![1, 2, 3]));
        assert_eq!(audio.audio(), Some(&[1u8, 2, 3][..]));
    }
}
