use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    /// A path field the URL cannot be built without is empty.
    RequiredFieldMissing {
        request: &'static str,
        field: &'static str,
    },
    /// Credentials are `[account_sid, auth_token]` or `[account_sid, key_sid, key_secret]`.
    CredentialArity {
        actual: usize,
    },
    InvalidPhoneNumber {
        input: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::RequiredFieldMissing { request, field } => {
                write!(f, "required field missing: {request}.{field}")
            }
            Self::CredentialArity { actual } => {
                write!(f, "expected 2 or 3 credential parts, got {actual}")
            }
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone number: {input}"),
        }
    }
}

impl std::error::Error for ValidationError {}
