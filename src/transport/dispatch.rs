use std::fmt;

use super::path::{ResponseFormat, build_url, response_format};
use super::query::encode_query;
use crate::domain::{Request, ValidationError};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully assembled HTTP request, before authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: String,
    /// Form body for POST/DELETE; `None` for GET.
    pub body: Option<String>,
    pub format: ResponseFormat,
}

/// HTTP method for each descriptor.
pub fn method_for(request: &Request) -> Method {
    match request {
        Request::DeleteNotification(_)
        | Request::DeleteOutgoingCallerId(_)
        | Request::DeleteRecording(_)
        | Request::DeleteParticipant(_)
        | Request::DeleteQueue(_) => Method::Delete,

        Request::SendMessage(_)
        | Request::MakeCall(_)
        | Request::ModifyCall(_)
        | Request::CreateQueue(_)
        | Request::ChangeQueue(_)
        | Request::DeQueue(_)
        | Request::UpdateParticipant(_)
        | Request::UpdateOutgoingCallerId(_)
        | Request::AddOutgoingCallerId(_)
        | Request::CreateIncomingPhoneNumber(_) => Method::Post,

        Request::Accounts(_)
        | Request::Account(_)
        | Request::Messages(_)
        | Request::Message(_)
        | Request::Calls(_)
        | Request::Call(_)
        | Request::Notifications(_)
        | Request::Notification(_)
        | Request::OutgoingCallerIds(_)
        | Request::OutgoingCallerId(_)
        | Request::Recordings(_)
        | Request::Recording(_)
        | Request::UsageRecords(_)
        | Request::Queues(_)
        | Request::Queue(_)
        | Request::QueueMembers(_)
        | Request::QueueMember(_)
        | Request::Conferences(_)
        | Request::Conference(_)
        | Request::Participants(_)
        | Request::Participant(_)
        | Request::IncomingPhoneNumbers(_)
        | Request::IncomingPhoneNumber(_)
        | Request::AvailablePhoneNumbers(_) => Method::Get,
    }
}

/// Build method, URL and body for `request`.
///
/// GET carries the encoded query on the URL; POST and DELETE carry it as a form body and
/// leave the URL bare.
pub fn build_request(
    api_base: &str,
    request: &Request,
    account_sid: &str,
) -> Result<OutboundRequest, ValidationError> {
    let mut url = build_url(api_base, request, account_sid)?;
    let query = encode_query(request);
    let method = method_for(request);

    let body = match method {
        Method::Get => {
            if !query.is_empty() {
                url.push('?');
                url.push_str(&query);
            }
            None
        }
        Method::Post | Method::Delete => Some(query),
    };

    Ok(OutboundRequest {
        method,
        url,
        body,
        format: response_format(request),
    })
}
