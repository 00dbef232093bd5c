use super::{Descriptor, PathRoles, QueryFields};

const RESOURCE: &str = "/Conferences";
const PARTICIPANTS: &str = "/Participants";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// List conferences, optionally filtered.
pub struct Conferences {
    /// `init`, `in-progress` or `completed`.
    pub status: String,
    pub friendly_name: String,
    pub date_created: String,
    pub date_created_before: String,
    pub date_created_after: String,
    pub date_updated: String,
    pub date_updated_before: String,
    pub date_updated_after: String,
    pub page_size: String,
}

impl Descriptor for Conferences {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("Status", &self.status)
            .one("FriendlyName", &self.friendly_name)
            .one("DateCreated", &self.date_created)
            .one("DateCreated<", &self.date_created_before)
            .one("DateCreated>", &self.date_created_after)
            .one("DateUpdated", &self.date_updated)
            .one("DateUpdated<", &self.date_updated_before)
            .one("DateUpdated>", &self.date_updated_after)
            .one("PageSize", &self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conference {
    pub sid: String,
}

impl Descriptor for Conference {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// List the participants of a conference.
pub struct Participants {
    /// Conference sid.
    pub sid: String,
    pub muted: String,
    pub hold: String,
    pub page_size: String,
}

impl Descriptor for Participants {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
            .sid(&self.sid)
            .subresource(PARTICIPANTS)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("Muted", &self.muted)
            .one("Hold", &self.hold)
            .one("PageSize", &self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Fetch one participant, identified by the call connecting it.
pub struct Participant {
    /// Conference sid.
    pub sid: String,
    pub call_sid: String,
}

impl Descriptor for Participant {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
            .sid(&self.sid)
            .subresource(PARTICIPANTS)
            .call_sid(&self.call_sid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Mute, unmute, hold or resume a participant.
pub struct UpdateParticipant {
    /// Conference sid.
    pub sid: String,
    pub call_sid: String,
    pub muted: String,
    pub hold: String,
    /// Music played while on hold.
    pub hold_url: String,
    pub hold_method: String,
}

impl Descriptor for UpdateParticipant {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
            .sid(&self.sid)
            .subresource(PARTICIPANTS)
            .call_sid(&self.call_sid)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("Muted", &self.muted)
            .one("Hold", &self.hold)
            .one("HoldUrl", &self.hold_url)
            .one("HoldMethod", &self.hold_method)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Kick a participant out of a conference.
pub struct DeleteParticipant {
    /// Conference sid.
    pub sid: String,
    pub call_sid: String,
}

impl Descriptor for DeleteParticipant {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
            .sid(&self.sid)
            .subresource(PARTICIPANTS)
            .call_sid(&self.call_sid)
    }
}
