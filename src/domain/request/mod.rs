//! Request descriptors: one typed value per Twilio resource or action.
//!
//! A descriptor says nothing about HTTP. It only exposes, through [`Descriptor`], which of
//! its fields land in the URL path and which are sent as parameters. The transport layer
//! walks those two views generically, so adding a resource means adding a struct, a
//! [`Descriptor`] impl, and a [`Request`] variant.

mod accounts;
mod caller_ids;
mod calls;
mod conferences;
mod messages;
mod notifications;
mod phone_numbers;
mod queues;
mod recordings;
mod usage;

pub use accounts::{Account, Accounts};
pub use caller_ids::{
    AddOutgoingCallerId, DeleteOutgoingCallerId, OutgoingCallerId, OutgoingCallerIds,
    UpdateOutgoingCallerId,
};
pub use calls::{Call, Calls, MakeCall, ModifyCall};
pub use conferences::{
    Conference, Conferences, DeleteParticipant, Participant, Participants, UpdateParticipant,
};
pub use messages::{Message, Messages, SendMessage};
pub use notifications::{DeleteNotification, Notification, Notifications};
pub use phone_numbers::{
    AvailablePhoneNumbers, CreateIncomingPhoneNumber, IncomingPhoneNumber, IncomingPhoneNumbers,
};
pub use queues::{
    ChangeQueue, CreateQueue, DeQueue, DeleteQueue, Queue, QueueMember, QueueMembers, Queues,
};
pub use recordings::{DeleteRecording, Recording, Recordings};
pub use usage::UsageRecords;

/// Path segments contributed by a descriptor, resolved in the order
/// `/Accounts/{account}{resource}/{sid}{subresource}/{call_sid}`.
///
/// `resource` and `subresource` are static segments including their leading `/`
/// (`"/Messages"`). `sid` and `call_sid` are runtime values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathRoles<'a> {
    pub resource: Option<&'static str>,
    pub sid: Option<&'a str>,
    pub subresource: Option<&'static str>,
    pub call_sid: Option<&'a str>,
}

impl<'a> PathRoles<'a> {
    /// No path roles: the request targets `/Accounts` itself.
    pub const fn none() -> Self {
        Self {
            resource: None,
            sid: None,
            subresource: None,
            call_sid: None,
        }
    }

    /// Start from a resource segment appended after the account sid.
    pub const fn resource(segment: &'static str) -> Self {
        Self {
            resource: Some(segment),
            ..Self::none()
        }
    }

    /// Declare the required `Sid` role.
    pub fn sid(mut self, value: &'a str) -> Self {
        self.sid = Some(value);
        self
    }

    pub fn subresource(mut self, segment: &'static str) -> Self {
        self.subresource = Some(segment);
        self
    }

    /// Declare `CallSid` as a path segment. Optional: an empty value adds nothing.
    pub fn call_sid(mut self, value: &'a str) -> Self {
        self.call_sid = Some(value);
        self
    }
}

/// Value of a single query field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryValue<'a> {
    One(&'a str),
    /// Emitted once per element under the same name.
    Many(&'a [String]),
}

/// Ordered `(parameter name, value)` list declared by a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFields<'a> {
    fields: Vec<(&'static str, QueryValue<'a>)>,
}

impl<'a> QueryFields<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn one(mut self, name: &'static str, value: &'a str) -> Self {
        self.fields.push((name, QueryValue::One(value)));
        self
    }

    pub fn many(mut self, name: &'static str, values: &'a [String]) -> Self {
        self.fields.push((name, QueryValue::Many(values)));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, QueryValue<'a>)> {
        self.fields.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Capability every descriptor implements: where its fields go on the wire.
pub trait Descriptor {
    fn path(&self) -> PathRoles<'_>;

    /// Query (GET) or form body (POST/DELETE) fields, in declaration order.
    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
    }
}

/// Generates the closed [`Request`] sum type, its `From` conversions and the delegation
/// to each variant's [`Descriptor`] impl.
macro_rules! define_requests {
    (
        $(#[$enum_meta:meta])*
        $vis:vis enum $Name:ident {
            $( $variant:ident ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis enum $Name {
            $( $variant($variant), )+
        }

        impl $Name {
            /// Descriptor type name, used in logs and validation errors.
            pub fn name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => stringify!($variant), )+
                }
            }

            pub fn descriptor(&self) -> &dyn Descriptor {
                match self {
                    $( Self::$variant(inner) => inner, )+
                }
            }
        }

        $(
            impl From<$variant> for $Name {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

define_requests! {
    /// Every request the client can issue.
    pub enum Request {
        Accounts,
        Account,
        SendMessage,
        Messages,
        Message,
        MakeCall,
        Calls,
        Call,
        ModifyCall,
        Notifications,
        Notification,
        DeleteNotification,
        OutgoingCallerIds,
        OutgoingCallerId,
        AddOutgoingCallerId,
        UpdateOutgoingCallerId,
        DeleteOutgoingCallerId,
        Recordings,
        Recording,
        DeleteRecording,
        UsageRecords,
        Queues,
        Queue,
        CreateQueue,
        ChangeQueue,
        DeleteQueue,
        QueueMembers,
        QueueMember,
        DeQueue,
        Conferences,
        Conference,
        Participants,
        Participant,
        UpdateParticipant,
        DeleteParticipant,
        IncomingPhoneNumbers,
        IncomingPhoneNumber,
        CreateIncomingPhoneNumber,
        AvailablePhoneNumbers,
    }
}

impl Descriptor for Request {
    fn path(&self) -> PathRoles<'_> {
        self.descriptor().path()
    }

    fn query(&self) -> QueryFields<'_> {
        self.descriptor().query()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_roles_builder_sets_each_role_once() {
        let roles = PathRoles::resource("/Queues")
            .sid("QU1")
            .subresource("/Members")
            .call_sid("CA1");
        assert_eq!(roles.resource, Some("/Queues"));
        assert_eq!(roles.sid, Some("QU1"));
        assert_eq!(roles.subresource, Some("/Members"));
        assert_eq!(roles.call_sid, Some("CA1"));
        assert_eq!(PathRoles::none(), PathRoles::default());
    }

    #[test]
    fn request_delegates_to_variant_descriptor() {
        let request = Request::from(Recording {
            sid: "RE1".to_owned(),
            ..Default::default()
        });
        assert_eq!(request.name(), "Recording");
        assert_eq!(request.path().sid, Some("RE1"));
        assert!(request.query().is_empty());

        let request = Request::from(Recordings {
            call_sid: "CA1".to_owned(),
            ..Default::default()
        });
        let fields = request.query();
        let call_sid = fields.iter().find(|(name, _)| *name == "CallSid");
        assert_eq!(call_sid, Some(&("CallSid", QueryValue::One("CA1"))));
        assert_eq!(request.path().call_sid, None);
    }
}
