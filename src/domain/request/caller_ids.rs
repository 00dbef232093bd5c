use super::{Descriptor, PathRoles, QueryFields};

const RESOURCE: &str = "/OutgoingCallerIds";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// List verified outgoing caller ids.
pub struct OutgoingCallerIds {
    pub phone_number: String,
    pub friendly_name: String,
    pub page_size: String,
}

impl Descriptor for OutgoingCallerIds {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("PhoneNumber", &self.phone_number)
            .one("FriendlyName", &self.friendly_name)
            .one("PageSize", &self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutgoingCallerId {
    pub sid: String,
}

impl Descriptor for OutgoingCallerId {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Start verification of a new caller id.
///
/// Twilio answers with a validation request holding the code the callee must enter.
pub struct AddOutgoingCallerId {
    pub phone_number: String,
    pub friendly_name: String,
    /// Seconds to wait before dialing, `0..=60`.
    pub call_delay: String,
    /// Digits to dial after the call connects.
    pub extension: String,
    pub status_callback: String,
    pub status_callback_method: String,
}

impl Descriptor for AddOutgoingCallerId {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("PhoneNumber", &self.phone_number)
            .one("FriendlyName", &self.friendly_name)
            .one("CallDelay", &self.call_delay)
            .one("Extension", &self.extension)
            .one("StatusCallback", &self.status_callback)
            .one("StatusCallbackMethod", &self.status_callback_method)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Rename a caller id.
pub struct UpdateOutgoingCallerId {
    pub sid: String,
    pub friendly_name: String,
}

impl Descriptor for UpdateOutgoingCallerId {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new().one("FriendlyName", &self.friendly_name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteOutgoingCallerId {
    pub sid: String,
}

impl Descriptor for DeleteOutgoingCallerId {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }
}
