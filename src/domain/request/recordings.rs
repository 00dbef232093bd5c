use super::{Descriptor, PathRoles, QueryFields};

const RESOURCE: &str = "/Recordings";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// List recordings, optionally those of a single call.
pub struct Recordings {
    /// Filter by call. Sent as a parameter, not as a path segment.
    pub call_sid: String,
    pub date_created: String,
    pub date_created_before: String,
    pub date_created_after: String,
    pub page_size: String,
}

impl Descriptor for Recordings {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE)
    }

    fn query(&self) -> QueryFields<'_> {
        QueryFields::new()
            .one("CallSid", &self.call_sid)
            .one("DateCreated", &self.date_created)
            .one("DateCreated<", &self.date_created_before)
            .one("DateCreated>", &self.date_created_after)
            .one("PageSize", &self.page_size)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Fetch a recording's metadata (JSON) or its audio.
///
/// | `get_recording` | `get_mp3` | fetches |
/// |---|---|---|
/// | `false` | any | metadata, `.json` |
/// | `true` | `false` | WAV audio |
/// | `true` | `true` | MP3 audio, `.mp3` |
pub struct Recording {
    pub sid: String,
    pub get_recording: bool,
    pub get_mp3: bool,
}

impl Descriptor for Recording {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteRecording {
    pub sid: String,
}

impl Descriptor for DeleteRecording {
    fn path(&self) -> PathRoles<'_> {
        PathRoles::resource(RESOURCE).sid(&self.sid)
    }
}
