use crate::domain::{
    AvailablePhoneNumbers, Call, Descriptor, Message, Recording, Request, UsageRecords,
    ValidationError,
};

/// Name reported when a descriptor's `Sid` path role is empty.
pub const SID_FIELD: &str = "Sid";

/// Body format Twilio answers with for a given request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Xml,
    Json,
    Audio,
}

/// Build the resource URL: `{api_base}/Accounts/{account_sid}{resource}/{sid}{subresource}/{call_sid}`
/// followed by the variant's suffix.
///
/// `api_base` is the API root including the version, e.g. `https://api.twilio.com/2010-04-01`.
pub fn build_url(
    api_base: &str,
    request: &Request,
    account_sid: &str,
) -> Result<String, ValidationError> {
    let roles = request.path();
    let mut url = format!("{}/Accounts", api_base.trim_end_matches('/'));

    if let Some(resource) = roles.resource {
        push_segment(&mut url, account_sid);
        url.push_str(resource);
    }
    if let Some(sid) = roles.sid {
        if sid.is_empty() {
            return Err(ValidationError::RequiredFieldMissing {
                request: request.name(),
                field: SID_FIELD,
            });
        }
        push_segment(&mut url, sid);
    }
    if let Some(subresource) = roles.subresource {
        url.push_str(subresource);
    }
    if let Some(call_sid) = roles.call_sid.filter(|value| !value.is_empty()) {
        push_segment(&mut url, call_sid);
    }

    apply_suffix(request, &mut url);
    Ok(url)
}

pub fn response_format(request: &Request) -> ResponseFormat {
    match request {
        Request::Recording(recording) if recording.get_recording => ResponseFormat::Audio,
        Request::Recording(_) => ResponseFormat::Json,
        _ => ResponseFormat::Xml,
    }
}

fn push_segment(url: &mut String, segment: &str) {
    url.push('/');
    url.push_str(segment);
}

// Every variant is listed so a new descriptor has to decide on its suffix here.
fn apply_suffix(request: &Request, url: &mut String) {
    match request {
        Request::Recording(recording) => recording_suffix(recording, url),
        Request::AvailablePhoneNumbers(search) => available_numbers_suffix(search, url),
        Request::Message(message) => message_suffix(message, url),
        Request::Call(call) => call_suffix(call, url),
        Request::UsageRecords(usage) => usage_suffix(usage, url),
        Request::QueueMember(member) => front_suffix(member.front, &member.call_sid, url),
        Request::DeQueue(dequeue) => front_suffix(dequeue.front, &dequeue.call_sid, url),
        Request::Accounts(_)
        | Request::Account(_)
        | Request::SendMessage(_)
        | Request::Messages(_)
        | Request::MakeCall(_)
        | Request::Calls(_)
        | Request::ModifyCall(_)
        | Request::Notifications(_)
        | Request::Notification(_)
        | Request::DeleteNotification(_)
        | Request::OutgoingCallerIds(_)
        | Request::OutgoingCallerId(_)
        | Request::AddOutgoingCallerId(_)
        | Request::UpdateOutgoingCallerId(_)
        | Request::DeleteOutgoingCallerId(_)
        | Request::Recordings(_)
        | Request::DeleteRecording(_)
        | Request::Queues(_)
        | Request::Queue(_)
        | Request::CreateQueue(_)
        | Request::ChangeQueue(_)
        | Request::DeleteQueue(_)
        | Request::QueueMembers(_)
        | Request::Conferences(_)
        | Request::Conference(_)
        | Request::Participants(_)
        | Request::Participant(_)
        | Request::UpdateParticipant(_)
        | Request::DeleteParticipant(_)
        | Request::IncomingPhoneNumbers(_)
        | Request::IncomingPhoneNumber(_)
        | Request::CreateIncomingPhoneNumber(_) => {}
    }
}

fn recording_suffix(recording: &Recording, url: &mut String) {
    if !recording.get_recording {
        url.push_str(".json");
    } else if recording.get_mp3 {
        url.push_str(".mp3");
    }
}

fn available_numbers_suffix(search: &AvailablePhoneNumbers, url: &mut String) {
    if !search.country_code.is_empty() {
        push_segment(url, &search.country_code);
    }
    if !search.number_type.is_empty() {
        push_segment(url, &search.number_type);
    }
}

fn message_suffix(message: &Message, url: &mut String) {
    if message.media {
        url.push_str("/Media");
        if !message.media_sid.is_empty() {
            push_segment(url, &message.media_sid);
        }
    }
}

fn call_suffix(call: &Call, url: &mut String) {
    if call.recordings {
        url.push_str("/Recordings");
    } else if call.notifications {
        url.push_str("/Notifications");
    }
}

fn usage_suffix(usage: &UsageRecords, url: &mut String) {
    push_segment(url, &usage.sub_resource);
}

fn front_suffix(front: bool, call_sid: &str, url: &mut String) {
    if front && call_sid.is_empty() {
        url.push_str("/Front");
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{
        Account, Accounts, ChangeQueue, Conference, DeQueue, DeleteNotification,
        DeleteOutgoingCallerId, DeleteParticipant, DeleteQueue, DeleteRecording,
        IncomingPhoneNumber, ModifyCall, Notification, OutgoingCallerId, Participant,
        Participants, Queue, QueueMember, QueueMembers, Recordings, SendMessage,
        UpdateOutgoingCallerId, UpdateParticipant,
    };

    use super::*;

    const BASE: &str = "https://api.twilio.com/2010-04-01";
    const ACCOUNT: &str = "AC123";

    fn url_for(request: impl Into<Request>) -> Result<String, ValidationError> {
        build_url(BASE, &request.into(), ACCOUNT)
    }

    fn sid_requests() -> Vec<Request> {
        vec![
            Message::default().into(),
            Call::default().into(),
            ModifyCall::default().into(),
            Notification::default().into(),
            DeleteNotification::default().into(),
            OutgoingCallerId::default().into(),
            UpdateOutgoingCallerId::default().into(),
            DeleteOutgoingCallerId::default().into(),
            Recording::default().into(),
            DeleteRecording::default().into(),
            Queue::default().into(),
            ChangeQueue::default().into(),
            DeleteQueue::default().into(),
            QueueMembers::default().into(),
            QueueMember::default().into(),
            DeQueue::default().into(),
            Conference::default().into(),
            Participants::default().into(),
            Participant::default().into(),
            UpdateParticipant::default().into(),
            DeleteParticipant::default().into(),
            IncomingPhoneNumber::default().into(),
        ]
    }

    #[test]
    fn every_sid_request_rejects_empty_sid() {
        for request in sid_requests() {
            assert!(request.path().sid.is_some(), "{} has no Sid", request.name());
            let err = build_url(BASE, &request, ACCOUNT).unwrap_err();
            assert_eq!(
                err,
                ValidationError::RequiredFieldMissing {
                    request: request.name(),
                    field: SID_FIELD,
                }
            );
        }
    }

    #[test]
    fn accounts_and_account_paths() {
        assert_eq!(
            url_for(Accounts::default()).unwrap(),
            "https://api.twilio.com/2010-04-01/Accounts"
        );
        assert_eq!(
            url_for(Account).unwrap(),
            "https://api.twilio.com/2010-04-01/Accounts/AC123"
        );
    }

    #[test]
    fn resource_and_sid_are_joined_in_order() {
        let url = url_for(SendMessage::default()).unwrap();
        assert_eq!(url, "https://api.twilio.com/2010-04-01/Accounts/AC123/Messages");

        let url = url_for(Queue {
            sid: "QU1".to_owned(),
        })
        .unwrap();
        assert_eq!(url, "https://api.twilio.com/2010-04-01/Accounts/AC123/Queues/QU1");
    }

    #[test]
    fn trailing_slash_on_api_base_is_ignored() {
        let url = build_url(
            "https://example.invalid/2010-04-01/",
            &Request::from(Account),
            ACCOUNT,
        )
        .unwrap();
        assert_eq!(url, "https://example.invalid/2010-04-01/Accounts/AC123");
    }

    #[test]
    fn call_sid_path_role_follows_subresource() {
        let url = url_for(Participant {
            sid: "CF1".to_owned(),
            call_sid: "CA1".to_owned(),
        })
        .unwrap();
        assert!(url.ends_with("/Accounts/AC123/Conferences/CF1/Participants/CA1"));

        let url = url_for(Participant {
            sid: "CF1".to_owned(),
            call_sid: String::new(),
        })
        .unwrap();
        assert!(url.ends_with("/Conferences/CF1/Participants"));
    }

    #[test]
    fn call_sid_query_field_never_enters_path() {
        let url = url_for(Recordings {
            call_sid: "CA1".to_owned(),
            ..Default::default()
        })
        .unwrap();
        assert!(url.ends_with("/Accounts/AC123/Recordings"));
    }

    #[test]
    fn recording_suffix_depends_on_audio_flags() {
        let metadata = Recording {
            sid: "RE1".to_owned(),
            ..Default::default()
        };
        assert!(url_for(metadata.clone()).unwrap().ends_with("/Recordings/RE1.json"));

        let wav = Recording {
            get_recording: true,
            ..metadata.clone()
        };
        assert!(url_for(wav).unwrap().ends_with("/Recordings/RE1"));

        let mp3 = Recording {
            get_recording: true,
            get_mp3: true,
            ..metadata.clone()
        };
        assert!(url_for(mp3).unwrap().ends_with("/Recordings/RE1.mp3"));

        let mp3_without_audio = Recording {
            get_mp3: true,
            ..metadata
        };
        assert!(url_for(mp3_without_audio).unwrap().ends_with("/RE1.json"));
    }

    #[test]
    fn available_numbers_append_country_then_type() {
        let url = url_for(AvailablePhoneNumbers {
            country_code: "US".to_owned(),
            number_type: "Local".to_owned(),
            area_code: "510".to_owned(),
            ..Default::default()
        })
        .unwrap();
        assert!(url.ends_with("/AC123/AvailablePhoneNumbers/US/Local"));

        let url = url_for(AvailablePhoneNumbers {
            number_type: "TollFree".to_owned(),
            ..Default::default()
        })
        .unwrap();
        assert!(url.ends_with("/AvailablePhoneNumbers/TollFree"));
    }

    #[test]
    fn message_media_suffix() {
        let message = Message {
            sid: "SM1".to_owned(),
            ..Default::default()
        };
        assert!(url_for(message.clone()).unwrap().ends_with("/Messages/SM1"));

        let media = Message {
            media: true,
            ..message.clone()
        };
        assert!(url_for(media).unwrap().ends_with("/Messages/SM1/Media"));

        let one = Message {
            media: true,
            media_sid: "ME1".to_owned(),
            ..message.clone()
        };
        assert!(url_for(one).unwrap().ends_with("/Messages/SM1/Media/ME1"));

        let ignored = Message {
            media_sid: "ME1".to_owned(),
            ..message
        };
        assert!(url_for(ignored).unwrap().ends_with("/Messages/SM1"));
    }

    #[test]
    fn call_recordings_take_precedence_over_notifications() {
        let both = Call {
            sid: "CA1".to_owned(),
            recordings: true,
            notifications: true,
        };
        assert!(url_for(both).unwrap().ends_with("/Calls/CA1/Recordings"));

        let notifications = Call {
            sid: "CA1".to_owned(),
            recordings: false,
            notifications: true,
        };
        assert!(url_for(notifications).unwrap().ends_with("/Calls/CA1/Notifications"));
    }

    #[test]
    fn usage_records_always_append_sub_resource() {
        let url = url_for(UsageRecords::interval("ThisMonth")).unwrap();
        assert_eq!(
            url,
            "https://api.twilio.com/2010-04-01/Accounts/AC123/Usage/Records/ThisMonth"
        );
    }

    #[test]
    fn queue_member_front_only_without_call_sid() {
        let front = QueueMember {
            sid: "QU1".to_owned(),
            call_sid: String::new(),
            front: true,
        };
        assert!(url_for(front).unwrap().ends_with("/Queues/QU1/Members/Front"));

        let by_call = QueueMember {
            sid: "QU1".to_owned(),
            call_sid: "CA1".to_owned(),
            front: true,
        };
        let url = url_for(by_call).unwrap();
        assert!(url.ends_with("/Queues/QU1/Members/CA1"));
        assert!(!url.ends_with("/Front"));
    }

    #[test]
    fn dequeue_front_only_without_call_sid() {
        let front = DeQueue {
            sid: "QU1".to_owned(),
            front: true,
            url: "https://example.com/next".to_owned(),
            ..Default::default()
        };
        assert!(url_for(front).unwrap().ends_with("/Queues/QU1/Members/Front"));

        let by_call = DeQueue {
            sid: "QU1".to_owned(),
            call_sid: "CA1".to_owned(),
            front: true,
            ..Default::default()
        };
        assert!(url_for(by_call).unwrap().ends_with("/Members/CA1"));
    }

    #[test]
    fn response_format_follows_recording_flags() {
        let metadata = Request::from(Recording::default());
        assert_eq!(response_format(&metadata), ResponseFormat::Json);

        let audio = Request::from(Recording {
            get_recording: true,
            ..Default::default()
        });
        assert_eq!(response_format(&audio), ResponseFormat::Audio);

        let call = Request::from(Call::default());
        assert_eq!(response_format(&call), ResponseFormat::Xml);
    }
}
