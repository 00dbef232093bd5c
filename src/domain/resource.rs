//! Resource payloads returned by Twilio.
//!
//! Field names follow Twilio's XML element names (`FriendlyName` → `friendly_name`). Values
//! are kept as the strings Twilio sent: prices, durations and dates are not reinterpreted,
//! and an element Twilio omits is `None`. An element Twilio sends empty (`<Price/>`) is
//! `Some("")`.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Account {
    pub sid: Option<String>,
    pub owner_account_sid: Option<String>,
    pub friendly_name: Option<String>,
    pub status: Option<String>,
    /// `Trial` or `Full`.
    pub r#type: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Message {
    pub sid: Option<String>,
    pub account_sid: Option<String>,
    pub messaging_service_sid: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub body: Option<String>,
    pub status: Option<String>,
    pub direction: Option<String>,
    pub num_segments: Option<String>,
    pub num_media: Option<String>,
    pub price: Option<String>,
    pub price_unit: Option<String>,
    pub error_code: Option<String>,
    pub error_message: Option<String>,
    pub date_created: Option<String>,
    pub date_sent: Option<String>,
    pub date_updated: Option<String>,
    pub api_version: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
/// Media attached to an MMS.
pub struct Media {
    pub sid: Option<String>,
    pub parent_sid: Option<String>,
    pub content_type: Option<String>,
    pub date_created: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Call {
    pub sid: Option<String>,
    pub parent_call_sid: Option<String>,
    pub account_sid: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub status: Option<String>,
    pub direction: Option<String>,
    pub answered_by: Option<String>,
    pub caller_name: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    /// Seconds.
    pub duration: Option<String>,
    pub price: Option<String>,
    pub price_unit: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Recording {
    pub sid: Option<String>,
    pub account_sid: Option<String>,
    pub call_sid: Option<String>,
    pub duration: Option<String>,
    pub channels: Option<String>,
    pub status: Option<String>,
    pub source: Option<String>,
    pub price: Option<String>,
    pub price_unit: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub api_version: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
/// An error or warning Twilio logged for the account.
pub struct Notification {
    pub sid: Option<String>,
    pub call_sid: Option<String>,
    /// `0` error, `1` warning.
    pub log: Option<String>,
    pub error_code: Option<String>,
    pub more_info: Option<String>,
    pub message_text: Option<String>,
    pub message_date: Option<String>,
    pub request_url: Option<String>,
    pub request_method: Option<String>,
    pub date_created: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OutgoingCallerId {
    pub sid: Option<String>,
    pub friendly_name: Option<String>,
    pub phone_number: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
/// Answer to [`AddOutgoingCallerId`](crate::AddOutgoingCallerId).
pub struct ValidationRequest {
    pub account_sid: Option<String>,
    pub phone_number: Option<String>,
    pub friendly_name: Option<String>,
    /// Code the callee must enter to complete verification.
    pub validation_code: Option<String>,
    pub call_sid: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct IncomingPhoneNumber {
    pub sid: Option<String>,
    pub friendly_name: Option<String>,
    pub phone_number: Option<String>,
    pub voice_url: Option<String>,
    pub voice_method: Option<String>,
    pub sms_url: Option<String>,
    pub sms_method: Option<String>,
    pub status_callback: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AvailablePhoneNumber {
    pub friendly_name: Option<String>,
    pub phone_number: Option<String>,
    pub lata: Option<String>,
    pub rate_center: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub iso_country: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct UsageRecord {
    pub category: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub count: Option<String>,
    pub count_unit: Option<String>,
    pub usage: Option<String>,
    pub usage_unit: Option<String>,
    pub price: Option<String>,
    pub price_unit: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Queue {
    pub sid: Option<String>,
    pub friendly_name: Option<String>,
    pub current_size: Option<String>,
    pub max_size: Option<String>,
    /// Seconds, averaged over the calls currently waiting.
    pub average_wait_time: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct QueueMember {
    pub call_sid: Option<String>,
    pub date_enqueued: Option<String>,
    pub wait_time: Option<String>,
    /// 1-based position in the queue.
    pub position: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Conference {
    pub sid: Option<String>,
    pub friendly_name: Option<String>,
    pub status: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub uri: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Participant {
    pub call_sid: Option<String>,
    pub conference_sid: Option<String>,
    pub muted: Option<String>,
    pub hold: Option<String>,
    pub start_conference_on_enter: Option<String>,
    pub end_conference_on_exit: Option<String>,
    pub date_created: Option<String>,
    pub date_updated: Option<String>,
    pub uri: Option<String>,
}
