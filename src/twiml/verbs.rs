//! TwiML verbs.
//!
//! Optional fields render as attributes, in declaration order, and are omitted when `None`
//! or empty.
//! The verb's primary value (text to speak, number to dial, URL to play) is the element text.

use serde::Serialize;

fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Speak text to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Say {
    #[serde(rename = "@voice", skip_serializing_if = "is_unset")]
    pub voice: Option<String>,
    #[serde(rename = "@language", skip_serializing_if = "is_unset")]
    pub language: Option<String>,
    #[serde(rename = "@loop", skip_serializing_if = "Option::is_none")]
    pub repeat: Option<u32>,
    #[serde(rename = "$text")]
    pub text: String,
}

impl Say {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }
}

/// Play an audio file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Play {
    #[serde(rename = "@loop", skip_serializing_if = "Option::is_none")]
    pub repeat: Option<u32>,
    #[serde(rename = "@digits", skip_serializing_if = "is_unset")]
    pub digits: Option<String>,
    #[serde(rename = "$text")]
    pub url: String,
}

impl Play {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Pause {
    /// Seconds.
    #[serde(rename = "@length", skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
}

/// Verbs allowed inside [`Gather`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GatherVerb {
    Say(Say),
    Play(Play),
    Pause(Pause),
}

/// Collect digits or speech, optionally prompting with nested verbs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Gather {
    #[serde(rename = "@input", skip_serializing_if = "is_unset")]
    pub input: Option<String>,
    #[serde(rename = "@action", skip_serializing_if = "is_unset")]
    pub action: Option<String>,
    #[serde(rename = "@method", skip_serializing_if = "is_unset")]
    pub method: Option<String>,
    #[serde(rename = "@timeout", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(rename = "@finishOnKey", skip_serializing_if = "is_unset")]
    pub finish_on_key: Option<String>,
    #[serde(rename = "@numDigits", skip_serializing_if = "Option::is_none")]
    pub num_digits: Option<u32>,
    #[serde(rename = "@speechTimeout", skip_serializing_if = "is_unset")]
    pub speech_timeout: Option<String>,
    #[serde(rename = "@hints", skip_serializing_if = "is_unset")]
    pub hints: Option<String>,
    #[serde(rename = "@language", skip_serializing_if = "is_unset")]
    pub language: Option<String>,
    #[serde(rename = "$value", skip_serializing_if = "Vec::is_empty")]
    pub prompts: Vec<GatherVerb>,
}

impl Gather {
    pub fn prompt(mut self, verb: impl Into<GatherVerb>) -> Self {
        self.prompts.push(verb.into());
        self
    }
}

/// Connect the call to another number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dial {
    #[serde(rename = "@action", skip_serializing_if = "is_unset")]
    pub action: Option<String>,
    #[serde(rename = "@method", skip_serializing_if = "is_unset")]
    pub method: Option<String>,
    #[serde(rename = "@timeout", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(rename = "@hangupOnStar", skip_serializing_if = "Option::is_none")]
    pub hangup_on_star: Option<bool>,
    #[serde(rename = "@timeLimit", skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<u32>,
    #[serde(rename = "@callerId", skip_serializing_if = "is_unset")]
    pub caller_id: Option<String>,
    #[serde(rename = "@record", skip_serializing_if = "is_unset")]
    pub record: Option<String>,
    #[serde(rename = "@trim", skip_serializing_if = "is_unset")]
    pub trim: Option<String>,
    #[serde(rename = "@recordingStatusCallback", skip_serializing_if = "is_unset")]
    pub recording_status_callback: Option<String>,
    #[serde(rename = "@recordingStatusCallbackMethod", skip_serializing_if = "is_unset")]
    pub recording_status_callback_method: Option<String>,
    #[serde(rename = "$text")]
    pub number: String,
}

impl Dial {
    pub fn number(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            ..Default::default()
        }
    }
}

/// Record the caller's voice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "@action", skip_serializing_if = "is_unset")]
    pub action: Option<String>,
    #[serde(rename = "@method", skip_serializing_if = "is_unset")]
    pub method: Option<String>,
    #[serde(rename = "@timeout", skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    #[serde(rename = "@finishOnKey", skip_serializing_if = "is_unset")]
    pub finish_on_key: Option<String>,
    #[serde(rename = "@maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(rename = "@playBeep", skip_serializing_if = "Option::is_none")]
    pub play_beep: Option<bool>,
    #[serde(rename = "@trim", skip_serializing_if = "is_unset")]
    pub trim: Option<String>,
    #[serde(rename = "@transcribe", skip_serializing_if = "Option::is_none")]
    pub transcribe: Option<bool>,
    #[serde(rename = "@transcribeCallback", skip_serializing_if = "is_unset")]
    pub transcribe_callback: Option<String>,
    #[serde(rename = "@recordingStatusCallback", skip_serializing_if = "is_unset")]
    pub recording_status_callback: Option<String>,
    #[serde(rename = "@recordingStatusCallbackMethod", skip_serializing_if = "is_unset")]
    pub recording_status_callback_method: Option<String>,
}

/// Hand call control to the TwiML at another URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Redirect {
    #[serde(rename = "@method", skip_serializing_if = "is_unset")]
    pub method: Option<String>,
    #[serde(rename = "$text")]
    pub url: String,
}

impl Redirect {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reject {
    /// `rejected` or `busy`.
    #[serde(rename = "@reason", skip_serializing_if = "is_unset")]
    pub reason: Option<String>,
}

/// Reply with an SMS during the call or message flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Message {
    #[serde(rename = "@to", skip_serializing_if = "is_unset")]
    pub to: Option<String>,
    #[serde(rename = "@from", skip_serializing_if = "is_unset")]
    pub from: Option<String>,
    #[serde(rename = "@action", skip_serializing_if = "is_unset")]
    pub action: Option<String>,
    #[serde(rename = "@method", skip_serializing_if = "is_unset")]
    pub method: Option<String>,
    #[serde(rename = "@statusCallback", skip_serializing_if = "is_unset")]
    pub status_callback: Option<String>,
    #[serde(rename = "$text")]
    pub body: String,
}

impl Message {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Default::default()
        }
    }
}

/// Place the caller in a named queue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Enqueue {
    #[serde(rename = "@action", skip_serializing_if = "is_unset")]
    pub action: Option<String>,
    #[serde(rename = "@method", skip_serializing_if = "is_unset")]
    pub method: Option<String>,
    #[serde(rename = "@waitUrl", skip_serializing_if = "is_unset")]
    pub wait_url: Option<String>,
    #[serde(rename = "@waitUrlMethod", skip_serializing_if = "is_unset")]
    pub wait_url_method: Option<String>,
    #[serde(rename = "@workflowSid", skip_serializing_if = "is_unset")]
    pub workflow_sid: Option<String>,
    #[serde(rename = "$text")]
    pub queue: String,
}

impl Enqueue {
    pub fn new(queue: impl Into<String>) -> Self {
        Self {
            queue: queue.into(),
            ..Default::default()
        }
    }
}

/// Any verb that may appear directly inside `<Response>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Verb {
    Say(Say),
    Play(Play),
    Pause(Pause),
    Gather(Gather),
    Dial(Dial),
    Record(Record),
    Redirect(Redirect),
    Reject(Reject),
    Message(Message),
    Enqueue(Enqueue),
    /// Take the caller out of the queue it is waiting in.
    Leave,
    Hangup,
}

macro_rules! impl_from_verb {
    ($target:ident: $($Verb:ident),+ $(,)?) => {
        $(
            impl From<$Verb> for $target {
                fn from(value: $Verb) -> Self {
                    Self::$Verb(value)
                }
            }
        )+
    };
}

impl_from_verb!(Verb: Say, Play, Pause, Gather, Dial, Record, Redirect, Reject, Message, Enqueue);
impl_from_verb!(GatherVerb: Say, Play, Pause);
