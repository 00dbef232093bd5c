use super::{Descriptor, PathRoles, QueryFields};
use crate::domain::PhoneNumber;

const RESOURCE: &str = "/Messages";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Send an SMS or MMS message.
///
/// Either `from` or `messaging_service_sid` must be set, and either `body` or at least one
/// `media_url`. Twilio validates these combinations; the client sends whatever is set.
pub struct SendMessage {
    /// Destination phone number in E.164 form.
    pub to: String,
    /// Twilio phone number or alphanumeric sender id.
    pub from: String,
    pub messaging_service_sid: String,
    pub body: String,
    /// Publicly reachable media URLs, sent as one `MediaUrl` parameter each.
    pub media_url: Vec<String>,
    /// URL Twilio posts delivery status updates to.
    pub status_callback: String,
    pub application_sid: String,
    pub max_price: String,
    pub provide_feedback: String,
    /// Seconds the message may stay queued before it is dropped.
    pub validity_period: String,
}

impl SendMessage {
    /// Plain-text message between two parsed phone numbers.
    pub fn text(to: &PhoneNumber, from: &PhoneNumber, body: impl Into<String>) -> Self {
        Self {
            to: to.e164().to_owned(),
            from: from.e164().to_owned(),
            body: body.into(),
            ..Default::default()
        }
    }
}

impl Descriptor for SendMessage {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("To", &self.to)
            .one("From", &self.from)
            .one("MessagingServiceSid", &self.messaging_service_sid)
            .one("Body", &self.body)
            .many("MediaUrl", &self.media_url)
            .one("StatusCallback", &self.status_callback)
            .one("ApplicationSid", &self.application_sid)
            .one("MaxPrice", &self.max_price)
            .one("ProvideFeedback", &self.provide_feedback)
            .one("ValidityPeriod", &self.validity_period)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// List messages, optionally filtered.
///
/// Date filters take `YYYY-MM-DD`. `date_sent_before` and `date_sent_after` map to
/// Twilio's inclusive `DateSent<=` and `DateSent>=` filters.
pub struct Messages {
    pub to: String,
    pub from: String,
    pub date_sent: String,
    pub date_sent_before: String,
    pub date_sent_after: String,
    pub page_size: String,
}

impl Descriptor for Messages {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("To", &self.to)
            .one("From", &self.from)
            .one("DateSent", &self.date_sent)
            .one("DateSent<", &self.date_sent_before)
            .one("DateSent>", &self.date_sent_after)
            .one("PageSize", &self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Fetch one message, or its media.
pub struct Message {
    pub sid: String,
    /// Fetch the message's media list (`/Media`) instead of the message.
    pub media: bool,
    /// With `media`, fetch a single media item.
    pub media_sid: String,
}

impl Descriptor for Message {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }
}
