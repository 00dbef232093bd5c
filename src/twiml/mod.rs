//! TwiML markup: the XML call-control documents Twilio fetches from your webhooks.
//!
//! ```rust
//! use twirest::twiml::{Dial, Response, Say};
//!
//! let xml = Response::new()
//!     .verb(Say::new("Connecting you now"))
//!     .verb(Dial::number("+14155552671"))
//!     .to_xml()
//!     .unwrap();
//! assert!(xml.contains("<Dial>+14155552671</Dial>"));
//! ```

use std::error::Error as StdError;

use quick_xml::events::{BytesDecl, Event};
use serde::Serialize;

mod verbs;

pub use verbs::{
    Dial, Enqueue, Gather, GatherVerb, Message, Pause, Play, Record, Redirect, Reject, Say, Verb,
};

#[derive(Debug, thiserror::Error)]
#[error("failed to render TwiML: {0}")]
pub struct MarkupError(#[source] Box<dyn StdError + Send + Sync>);

impl MarkupError {
    fn new(err: impl StdError + Send + Sync + 'static) -> Self {
        Self(Box::new(err))
    }
}

/// A `<Response>` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Response {
    #[serde(rename = "$value")]
    verbs: Vec<Verb>,
}

impl Response {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verb(mut self, verb: impl Into<Verb>) -> Self {
        self.verbs.push(verb.into());
        self
    }

    pub fn leave(self) -> Self {
        self.verb(Verb::Leave)
    }

    pub fn hangup(self) -> Self {
        self.verb(Verb::Hangup)
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// Render the document, prefixed with an XML declaration.
    pub fn to_xml(&self) -> Result<String, MarkupError> {
        let mut writer = quick_xml::Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(MarkupError::new)?;
        writer
            .write_serializable("Response", self)
            .map_err(MarkupError::new)?;

        String::from_utf8(writer.into_inner()).map_err(MarkupError::new)
    }
}

/// Render a single verb (or any serializable value) without an XML declaration.
pub fn to_string<T: Serialize>(value: &T) -> Result<String, MarkupError> {
    quick_xml::se::to_string(value).map_err(MarkupError::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dial_renders_number_as_text() {
        assert_eq!(to_string(&Dial::number("5")).unwrap(), "<Dial>5</Dial>");
    }

    #[test]
    fn dial_renders_recording_status_callback() {
        let dial = Dial {
            recording_status_callback: Some("testing".to_owned()),
            ..Dial::number("5")
        };
        assert_eq!(
            to_string(&dial).unwrap(),
            r#"<Dial recordingStatusCallback="testing">5</Dial>"#
        );
    }

    #[test]
    fn dial_attributes_follow_declaration_order() {
        let dial = Dial {
            recording_status_callback_method: Some("POST".to_owned()),
            recording_status_callback: Some("testing".to_owned()),
            ..Dial::number("5")
        };
        assert_eq!(
            to_string(&dial).unwrap(),
            r#"<Dial recordingStatusCallback="testing" recordingStatusCallbackMethod="POST">5</Dial>"#
        );
    }

    #[test]
    fn empty_attributes_are_omitted() {
        let dial = Dial {
            recording_status_callback: Some(String::new()),
            recording_status_callback_method: Some(String::new()),
            caller_id: Some(String::new()),
            ..Dial::number("5")
        };
        assert_eq!(to_string(&dial).unwrap(), "<Dial>5</Dial>");

        let say = Say {
            voice: Some(String::new()),
            language: Some("en-GB".to_owned()),
            ..Say::new("Hi")
        };
        assert_eq!(to_string(&say).unwrap(), r#"<Say language="en-GB">Hi</Say>"#);
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(
            to_string(&Say::new("Tom & Jerry <3")).unwrap(),
            "<Say>Tom &amp; Jerry &lt;3</Say>"
        );
    }

    #[test]
    fn response_renders_declaration_and_verbs_in_order() {
        let xml = Response::new()
            .verb(Say {
                voice: Some("alice".to_owned()),
                ..Say::new("Hello")
            })
            .verb(Pause { length: Some(2) })
            .verb(Dial {
                timeout: Some(20),
                hangup_on_star: Some(true),
                ..Dial::number("+14155552671")
            })
            .hangup()
            .to_xml()
            .unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#), "{xml}");
        let say = xml.find(r#"<Say voice="alice">Hello</Say>"#).unwrap();
        let pause = xml.find(r#"<Pause length="2"/>"#).unwrap();
        let dial = xml
            .find(r#"<Dial timeout="20" hangupOnStar="true">+14155552671</Dial>"#)
            .unwrap();
        let hangup = xml.find("<Hangup/>").unwrap();
        assert!(say < pause && pause < dial && dial < hangup, "{xml}");
        assert!(xml.ends_with("</Response>"), "{xml}");
    }

    #[test]
    fn gather_nests_prompts() {
        let gather = Gather {
            num_digits: Some(1),
            action: Some("/menu".to_owned()),
            ..Default::default()
        }
        .prompt(Say::new("Press 1 for sales"))
        .prompt(Play::new("https://example.com/beep.mp3"));

        let xml = Response::new().verb(gather).to_xml().unwrap();
        assert!(
            xml.contains(
                r#"<Gather action="/menu" numDigits="1"><Say>Press 1 for sales</Say><Play>https://example.com/beep.mp3</Play></Gather>"#
            ),
            "{xml}"
        );
    }

    #[test]
    fn queue_verbs_render() {
        let xml = Response::new()
            .verb(Enqueue {
                wait_url: Some("/hold".to_owned()),
                ..Enqueue::new("support")
            })
            .leave()
            .to_xml()
            .unwrap();
        assert!(xml.contains(r#"<Enqueue waitUrl="/hold">support</Enqueue>"#), "{xml}");
        assert!(xml.contains("<Leave/>"), "{xml}");
        assert_eq!(Response::new().leave().verbs(), &[Verb::Leave]);
    }
}
