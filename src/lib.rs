//! Typed Rust client for the Twilio REST API (`2010-04-01`), plus TwiML generation.
//!
//! Every endpoint is a plain descriptor struct. The crate turns a descriptor into a URL,
//! an HTTP method and a form-encoded query or body, sends it with basic authentication,
//! and decodes Twilio's XML answer into a [`TwilioResponse`]. A `RestException` in the
//! body becomes [`TwilioError::Api`], whatever the HTTP status.
//!
//! ```rust,no_run
//! use twirest::{Credentials, SendMessage, TwilioClient};
//!
//! fn main() -> Result<(), twirest::TwilioError> {
//!     let client = TwilioClient::new(Credentials::new("AC...", "...")?);
//!     let response = client.request(SendMessage {
//!         to: "+14155552671".to_owned(),
//!         from: "+14155550100".to_owned(),
//!         body: "hello".to_owned(),
//!         ..Default::default()
//!     })?;
//!     println!("{:?}", response.resource());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
pub mod twiml;
mod transport;

pub use client::{
    Auth, Credentials, DecodePolicy, TwilioClient, TwilioClientBuilder, TwilioError,
};
pub use domain::resource;
pub use domain::{
    Account, Accounts, AccountSid, AddOutgoingCallerId, ApiKeySid, AuthToken,
    AvailablePhoneNumbers, Call, Calls, ChangeQueue, Conference, Conferences,
    CreateIncomingPhoneNumber, CreateQueue, DeQueue, DeleteNotification, DeleteOutgoingCallerId,
    DeleteParticipant, DeleteQueue, DeleteRecording, Descriptor, IncomingPhoneNumber,
    IncomingPhoneNumbers, MakeCall, Message, Messages, ModifyCall, Notification, Notifications,
    OutgoingCallerId, OutgoingCallerIds, Participant, Participants, Payload, PhoneNumber, Queue,
    QueueMember, QueueMembers, Queues, Recording, Recordings, Request, Resource, ResponseStatus,
    RestException, SendMessage, TwilioResponse, UpdateOutgoingCallerId, UpdateParticipant,
    UsageRecords, ValidationError,
};
pub use transport::{Method, ResponseFormat};
