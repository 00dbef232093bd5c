use super::{Descriptor, PathRoles, QueryFields};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// List the main account and its subaccounts.
pub struct Accounts {
    pub friendly_name: String,
    /// `active`, `suspended` or `closed`.
    pub status: String,
}

impl Descriptor for Accounts {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::none()
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("FriendlyName", &self.friendly_name)
            .one("Status", &self.status)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Fetch the account the client is authenticated for (`/Accounts/{AccountSid}`).
pub struct Account;

impl Descriptor for Account {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource("")
    }
}
