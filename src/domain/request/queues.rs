use super::{Descriptor, PathRoles, QueryFields};

const RESOURCE: &str = "/Queues";
const MEMBERS: &str = "/Members";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queues {
    pub page_size: String,
}

impl Descriptor for Queues {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new().one("PageSize", &self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Queue {
    pub sid: String,
}

impl Descriptor for Queue {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Create a call queue.
pub struct CreateQueue {
    pub friendly_name: String,
    /// Maximum number of waiting calls; Twilio defaults to 100.
    pub max_size: String,
}

impl Descriptor for CreateQueue {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("FriendlyName", &self.friendly_name)
            .one("MaxSize", &self.max_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Rename or resize an existing queue.
pub struct ChangeQueue {
    pub sid: String,
    pub friendly_name: String,
    pub max_size: String,
}

impl Descriptor for ChangeQueue {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("FriendlyName", &self.friendly_name)
            .one("MaxSize", &self.max_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteQueue {
    pub sid: String,
}

impl Descriptor for DeleteQueue {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// List the calls waiting in a queue.
pub struct QueueMembers {
    pub sid: String,
    pub page_size: String,
}

impl Descriptor for QueueMembers {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
            .sid(&self.sid)
            .subresource(MEMBERS)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new().one("PageSize", &self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Fetch one waiting call, either by call sid or the one at the front of the queue.
pub struct QueueMember {
    /// Queue sid.
    pub sid: String,
    pub call_sid: String,
    /// Target the front of the queue. Ignored when `call_sid` is set.
    pub front: bool,
}

impl Descriptor for QueueMember {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
            .sid(&self.sid)
            .subresource(MEMBERS)
            .call_sid(&self.call_sid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Take a call out of a queue and redirect it to new TwiML.
pub struct DeQueue {
    /// Queue sid.
    pub sid: String,
    pub call_sid: String,
    /// Dequeue the call at the front of the queue. Ignored when `call_sid` is set.
    pub front: bool,
    pub url: String,
    pub method: String,
}

impl Descriptor for DeQueue {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
            .sid(&self.sid)
            .subresource(MEMBERS)
            .call_sid(&self.call_sid)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("Url", &self.url)
            .one("Method", &self.method)
    }
}
