use super::{Descriptor, PathRoles, QueryFields};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// List usage records.
///
/// `sub_resource` selects the aggregation interval and is always appended to the path:
/// `Daily`, `Monthly`, `Yearly`, `AllTime`, `Today`, `Yesterday`, `ThisMonth` or
/// `LastMonth`.
pub struct UsageRecords {
    pub sub_resource: String,
    /// Usage category such as `calls`, `sms` or `recordings`.
    pub category: String,
    pub start_date: String,
    pub end_date: String,
    pub page_size: String,
}

impl UsageRecords {
    pub fn interval(sub_resource: impl Into<String>) -> Self {
        Self {
            sub_resource: sub_resource.into(),
            ..Default::default()
        }
    }
}

impl Descriptor for UsageRecords {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource("/Usage/Records")
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("Category", &self.category)
            .one("StartDate", &self.start_date)
            .one("EndDate", &self.end_date)
            .one("PageSize", &self.page_size)
    }
}
