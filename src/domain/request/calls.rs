use super::{Descriptor, PathRoles, QueryFields};
use crate::domain::PhoneNumber;

const RESOURCE: &str = "/Calls";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Place an outbound call.
///
/// Twilio fetches TwiML from `url` (or runs `application_sid`) once the call connects.
pub struct MakeCall {
    pub to: String,
    pub from: String,
    pub url: String,
    pub application_sid: String,
    /// HTTP method used to fetch `url`; Twilio defaults to `POST`.
    pub method: String,
    pub fallback_url: String,
    pub fallback_method: String,
    pub status_callback: String,
    pub status_callback_method: String,
    /// Call progress events to report: `initiated`, `ringing`, `answered`, `completed`.
    pub status_callback_event: Vec<String>,
    pub send_digits: String,
    /// Seconds to let the call ring before giving up.
    pub timeout: String,
    pub record: String,
    pub recording_status_callback: String,
    pub machine_detection: String,
}

impl MakeCall {
    pub fn to_number(to: &PhoneNumber, from: &PhoneNumber, url: impl Into<String>) -> Self {
        Self {
            to: to.e164().to_owned(),
            from: from.e164().to_owned(),
            url: url.into(),
            ..Default::default()
        }
    }
}

impl Descriptor for MakeCall {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("To", &self.to)
            .one("From", &self.from)
            .one("Url", &self.url)
            .one("ApplicationSid", &self.application_sid)
            .one("Method", &self.method)
            .one("FallbackUrl", &self.fallback_url)
            .one("FallbackMethod", &self.fallback_method)
            .one("StatusCallback", &self.status_callback)
            .one("StatusCallbackMethod", &self.status_callback_method)
            .many("StatusCallbackEvent", &self.status_callback_event)
            .one("SendDigits", &self.send_digits)
            .one("Timeout", &self.timeout)
            .one("Record", &self.record)
            .one("RecordingStatusCallback", &self.recording_status_callback)
            .one("MachineDetection", &self.machine_detection)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// List calls, optionally filtered.
pub struct Calls {
    pub to: String,
    pub from: String,
    pub parent_call_sid: String,
    /// `queued`, `ringing`, `in-progress`, `canceled`, `completed`, `failed`, `busy` or
    /// `no-answer`.
    pub status: String,
    pub start_time: String,
    pub start_time_before: String,
    pub start_time_after: String,
    pub end_time: String,
    pub end_time_before: String,
    pub end_time_after: String,
    pub page_size: String,
}

impl Descriptor for Calls {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("To", &self.to)
            .one("From", &self.from)
            .one("ParentCallSid", &self.parent_call_sid)
            .one("Status", &self.status)
            .one("StartTime", &self.start_time)
            .one("StartTime<", &self.start_time_before)
            .one("StartTime>", &self.start_time_after)
            .one("EndTime", &self.end_time)
            .one("EndTime<", &self.end_time_before)
            .one("EndTime>", &self.end_time_after)
            .one("PageSize", &self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Fetch one call, or the recordings/notifications it produced.
///
/// `recordings` wins when both flags are set.
pub struct Call {
    pub sid: String,
    pub recordings: bool,
    pub notifications: bool,
}

impl Descriptor for Call {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Redirect or end a call in progress.
pub struct ModifyCall {
    pub sid: String,
    /// New TwiML URL to redirect the call to.
    pub url: String,
    pub method: String,
    /// `canceled` or `completed` to hang up.
    pub status: String,
    pub fallback_url: String,
    pub fallback_method: String,
    pub status_callback: String,
    pub status_callback_method: String,
    /// Inline TwiML to execute instead of fetching `url`.
    pub twiml: String,
}

impl Descriptor for ModifyCall {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("Url", &self.url)
            .one("Method", &self.method)
            .one("Status", &self.status)
            .one("FallbackUrl", &self.fallback_url)
            .one("FallbackMethod", &self.fallback_method)
            .one("StatusCallback", &self.status_callback)
            .one("StatusCallbackMethod", &self.status_callback_method)
            .one("Twiml", &self.twiml)
    }
}
