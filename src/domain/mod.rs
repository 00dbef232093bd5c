//! Domain layer: request descriptors, decoded resources and validated values (no I/O).

pub mod request;
pub mod resource;
mod response;
mod validation;
mod value;

pub use request::{
    Account, Accounts, AddOutgoingCallerId, AvailablePhoneNumbers, Call, Calls, ChangeQueue,
    Conference, Conferences, CreateIncomingPhoneNumber, CreateQueue, DeQueue, DeleteNotification,
    DeleteOutgoingCallerId, DeleteParticipant, DeleteQueue, DeleteRecording, Descriptor,
    IncomingPhoneNumber, IncomingPhoneNumbers, MakeCall, Message, Messages, ModifyCall,
    Notification, Notifications, OutgoingCallerId, OutgoingCallerIds, Participant, Participants,
    PathRoles, QueryFields, QueryValue, Queue, QueueMember, QueueMembers, Queues, Recording,
    Recordings, Request, SendMessage, UpdateOutgoingCallerId, UpdateParticipant, UsageRecords,
};
pub use response::{Payload, Resource, ResponseStatus, RestException, TwilioResponse};
pub use validation::ValidationError;
pub use value::{AccountSid, ApiKeySid, AuthToken, PhoneNumber};
