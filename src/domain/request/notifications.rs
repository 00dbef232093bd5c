use super::{Descriptor, PathRoles, QueryFields};

const RESOURCE: &str = "/Notifications";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// List account notifications (errors and warnings raised by Twilio).
pub struct Notifications {
    /// `0` for errors, `1` for warnings.
    pub log: String,
    pub message_date: String,
    pub message_date_before: String,
    pub message_date_after: String,
    pub page_size: String,
}

impl Descriptor for Notifications {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("Log", &self.log)
            .one("MessageDate", &self.message_date)
            .one("MessageDate<", &self.message_date_before)
            .one("MessageDate>", &self.message_date_after)
            .one("PageSize", &self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub sid: String,
}

impl Descriptor for Notification {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteNotification {
    pub sid: String,
}

impl Descriptor for DeleteNotification {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }
}
