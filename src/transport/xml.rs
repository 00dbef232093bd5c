use serde::Deserialize;

use super::TransportError;
use crate::domain::resource;
use crate::domain::{Payload, Resource, RestException};

/// `<Calls><Call>..</Call><Call>..</Call></Calls>` style list wrappers. Paging attributes
/// on the wrapper are ignored.
macro_rules! wire_list {
    ($( $Name:ident => $tag:literal, $Item:ty; )+) => {
        $(
            #[derive(Debug, Default, Deserialize)]
            struct $Name {
                #[serde(rename = $tag, default)]
                items: Vec<$Item>,
            }
        )+
    };
}

wire_list! {
    AccountList => "Account", resource::Account;
    MessageList => "Message", resource::Message;
    MediaList => "Media", resource::Media;
    CallList => "Call", resource::Call;
    RecordingList => "Recording", resource::Recording;
    NotificationList => "Notification", resource::Notification;
    OutgoingCallerIdList => "OutgoingCallerId", resource::OutgoingCallerId;
    IncomingPhoneNumberList => "IncomingPhoneNumber", resource::IncomingPhoneNumber;
    AvailablePhoneNumberList => "AvailablePhoneNumber", resource::AvailablePhoneNumber;
    UsageRecordList => "UsageRecord", resource::UsageRecord;
    QueueList => "Queue", resource::Queue;
    QueueMemberList => "QueueMember", resource::QueueMember;
    ConferenceList => "Conference", resource::Conference;
    ParticipantList => "Participant", resource::Participant;
}

/// `<TwilioResponse>` document. Twilio populates exactly one child.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct XmlEnvelope {
    rest_exception: Option<XmlException>,
    account: Option<resource::Account>,
    accounts: Option<AccountList>,
    message: Option<resource::Message>,
    messages: Option<MessageList>,
    media: Option<resource::Media>,
    media_list: Option<MediaList>,
    call: Option<resource::Call>,
    calls: Option<CallList>,
    recording: Option<resource::Recording>,
    recordings: Option<RecordingList>,
    notification: Option<resource::Notification>,
    notifications: Option<NotificationList>,
    outgoing_caller_id: Option<resource::OutgoingCallerId>,
    outgoing_caller_ids: Option<OutgoingCallerIdList>,
    validation_request: Option<resource::ValidationRequest>,
    incoming_phone_number: Option<resource::IncomingPhoneNumber>,
    incoming_phone_numbers: Option<IncomingPhoneNumberList>,
    available_phone_numbers: Option<AvailablePhoneNumberList>,
    usage_records: Option<UsageRecordList>,
    queue: Option<resource::Queue>,
    queues: Option<QueueList>,
    queue_member: Option<resource::QueueMember>,
    queue_members: Option<QueueMemberList>,
    conference: Option<resource::Conference>,
    conferences: Option<ConferenceList>,
    participant: Option<resource::Participant>,
    participants: Option<ParticipantList>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
struct XmlException {
    // Numeric elements are read as text so an empty `<Code/>` does not lose the exception.
    code: Option<String>,
    detail: Option<String>,
    message: Option<String>,
    more_info: Option<String>,
    status: Option<String>,
}

fn parse_number<T: std::str::FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|value| value.trim().parse().ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}

impl From<XmlException> for RestException {
    fn from(value: XmlException) -> Self {
        Self {
            code: parse_number(value.code.as_deref()).unwrap_or_default(),
            detail: non_empty(value.detail).or(value.message).unwrap_or_default(),
            more_info: non_empty(value.more_info),
            status: parse_number(value.status.as_deref()),
        }
    }
}

impl XmlEnvelope {
    fn into_payload(self) -> Payload {
        if let Some(exception) = self.rest_exception {
            return Payload::Exception(exception.into());
        }

        let resource = self
            .account
            .map(Resource::Account)
            .or(self.accounts.map(|list| Resource::Accounts(list.items)))
            .or(self.message.map(Resource::Message))
            .or(self.messages.map(|list| Resource::Messages(list.items)))
            .or(self.media.map(Resource::Media))
            .or(self.media_list.map(|list| Resource::MediaList(list.items)))
            .or(self.call.map(Resource::Call))
            .or(self.calls.map(|list| Resource::Calls(list.items)))
            .or(self.recording.map(Resource::Recording))
            .or(self.recordings.map(|list| Resource::Recordings(list.items)))
            .or(self.notification.map(Resource::Notification))
            .or(self.notifications.map(|list| Resource::Notifications(list.items)))
            .or(self.outgoing_caller_id.map(Resource::OutgoingCallerId))
            .or(self
                .outgoing_caller_ids
                .map(|list| Resource::OutgoingCallerIds(list.items)))
            .or(self.validation_request.map(Resource::ValidationRequest))
            .or(self.incoming_phone_number.map(Resource::IncomingPhoneNumber))
            .or(self
                .incoming_phone_numbers
                .map(|list| Resource::IncomingPhoneNumbers(list.items)))
            .or(self
                .available_phone_numbers
                .map(|list| Resource::AvailablePhoneNumbers(list.items)))
            .or(self.usage_records.map(|list| Resource::UsageRecords(list.items)))
            .or(self.queue.map(Resource::Queue))
            .or(self.queues.map(|list| Resource::Queues(list.items)))
            .or(self.queue_member.map(Resource::QueueMember))
            .or(self.queue_members.map(|list| Resource::QueueMembers(list.items)))
            .or(self.conference.map(Resource::Conference))
            .or(self.conferences.map(|list| Resource::Conferences(list.items)))
            .or(self.participant.map(Resource::Participant))
            .or(self.participants.map(|list| Resource::Participants(list.items)));

        resource.map_or(Payload::Empty, Payload::Resource)
    }
}

/// Decode a `<TwilioResponse>` body. An empty body decodes to [`Payload::Empty`].
pub fn decode_xml_response(body: &[u8]) -> Result<Payload, TransportError> {
    let text = std::str::from_utf8(body)?;
    if text.trim().is_empty() {
        return Ok(Payload::Empty);
    }
    let envelope: XmlEnvelope = quick_xml::de::from_str(text)?;
    Ok(envelope.into_payload())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rest_exception() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<TwilioResponse>
  <RestException>
    <Code>20003</Code>
    <Detail>Authentication Error</Detail>
    <Message>Authenticate</Message>
    <MoreInfo>https://www.example.com/errors</MoreInfo>
    <Status>401</Status>
  </RestException>
</TwilioResponse>"#;

        let payload = decode_xml_response(xml.as_bytes()).unwrap();
        assert_eq!(
            payload,
            Payload::Exception(RestException {
                code: 20003,
                detail: "Authentication Error".to_owned(),
                more_info: Some("https://www.example.com/errors".to_owned()),
                status: Some(401),
            })
        );
    }

    #[test]
    fn exception_without_detail_falls_back_to_message() {
        let xml = "<TwilioResponse><RestException><Code>20404</Code>\
                   <Message>The requested resource was not found</Message>\
                   </RestException></TwilioResponse>";

        let Payload::Exception(exception) = decode_xml_response(xml.as_bytes()).unwrap() else {
            panic!("expected exception");
        };
        assert_eq!(exception.code, 20404);
        assert_eq!(exception.detail, "The requested resource was not found");
        assert_eq!(exception.more_info, None);
    }

    #[test]
    fn empty_exception_elements_keep_the_exception() {
        let xml = "<TwilioResponse><RestException><Code/><Detail>Upstream failure</Detail>\
                   <MoreInfo/><Status></Status></RestException></TwilioResponse>";

        assert_eq!(
            decode_xml_response(xml.as_bytes()).unwrap(),
            Payload::Exception(RestException {
                code: 0,
                detail: "Upstream failure".to_owned(),
                more_info: None,
                status: None,
            })
        );
    }

    #[test]
    fn decodes_single_message() {
        let xml = r#"
<TwilioResponse>
  <Message>
    <Sid>SM1</Sid>
    <To>+14155552671</To>
    <From>+14155550100</From>
    <Body>hello &amp; welcome</Body>
    <Status>queued</Status>
    <NumSegments>1</NumSegments>
    <Price/>
    <SubresourceUris>
      <Media>/2010-04-01/Accounts/AC1/Messages/SM1/Media</Media>
    </SubresourceUris>
  </Message>
</TwilioResponse>"#;

        let payload = decode_xml_response(xml.as_bytes()).unwrap();
        let Payload::Resource(Resource::Message(message)) = payload else {
            panic!("expected message, got {payload:?}");
        };
        assert_eq!(message.sid.as_deref(), Some("SM1"));
        assert_eq!(message.body.as_deref(), Some("hello & welcome"));
        assert_eq!(message.status.as_deref(), Some("queued"));
        assert_eq!(message.num_segments.as_deref(), Some("1"));
        assert_eq!(message.price.as_deref(), Some(""));
        assert_eq!(message.error_code, None);
    }

    #[test]
    fn decodes_list_and_ignores_paging_attributes() {
        let xml = r#"
<TwilioResponse>
  <Calls page="0" pagesize="50" total="2">
    <Call><Sid>CA1</Sid><Status>completed</Status></Call>
    <Call><Sid>CA2</Sid><Status>busy</Status></Call>
  </Calls>
</TwilioResponse>"#;

        let payload = decode_xml_response(xml.as_bytes()).unwrap();
        let Payload::Resource(Resource::Calls(calls)) = payload else {
            panic!("expected call list, got {payload:?}");
        };
        let sids = calls
            .iter()
            .filter_map(|call| call.sid.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(sids, vec!["CA1", "CA2"]);
        assert_eq!(calls[1].status.as_deref(), Some("busy"));
    }

    #[test]
    fn decodes_empty_list() {
        let xml = r#"<TwilioResponse><Queues page="0"></Queues></TwilioResponse>"#;
        assert_eq!(
            decode_xml_response(xml.as_bytes()).unwrap(),
            Payload::Resource(Resource::Queues(Vec::new()))
        );
    }

    #[test]
    fn decodes_available_numbers_and_queue_member() {
        let xml = r#"
<TwilioResponse>
  <AvailablePhoneNumbers uri="/2010-04-01/Accounts/AC1/AvailablePhoneNumbers/US/Local">
    <AvailablePhoneNumber>
      <FriendlyName>(510) 564-7903</FriendlyName>
      <PhoneNumber>+15105647903</PhoneNumber>
      <Region>CA</Region>
      <IsoCountry>US</IsoCountry>
    </AvailablePhoneNumber>
  </AvailablePhoneNumbers>
</TwilioResponse>"#;
        let Payload::Resource(Resource::AvailablePhoneNumbers(numbers)) =
            decode_xml_response(xml.as_bytes()).unwrap()
        else {
            panic!("expected available numbers");
        };
        assert_eq!(numbers.len(), 1);
        assert_eq!(numbers[0].phone_number.as_deref(), Some("+15105647903"));
        assert_eq!(numbers[0].iso_country.as_deref(), Some("US"));

        let xml = "<TwilioResponse><QueueMember><CallSid>CA1</CallSid>\
                   <Position>1</Position><WaitTime>30</WaitTime></QueueMember></TwilioResponse>";
        let Payload::Resource(Resource::QueueMember(member)) =
            decode_xml_response(xml.as_bytes()).unwrap()
        else {
            panic!("expected queue member");
        };
        assert_eq!(member.call_sid.as_deref(), Some("CA1"));
        assert_eq!(member.position.as_deref(), Some("1"));
    }

    #[test]
    fn empty_body_is_empty_payload() {
        assert_eq!(decode_xml_response(b"").unwrap(), Payload::Empty);
        assert_eq!(decode_xml_response(b"  \n").unwrap(), Payload::Empty);
    }

    #[test]
    fn unknown_root_child_is_empty_payload() {
        let xml = "<TwilioResponse><Something><Sid>X</Sid></Something></TwilioResponse>";
        assert_eq!(decode_xml_response(xml.as_bytes()).unwrap(), Payload::Empty);
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(matches!(
            decode_xml_response(b"<TwilioResponse><Call><Sid>CA1</Call></TwilioResponse>"),
            Err(TransportError::Xml(_))
        ));
        assert!(matches!(
            decode_xml_response(&[0xff, 0xfe, 0x00]),
            Err(TransportError::Utf8(_))
        ));
    }
}
