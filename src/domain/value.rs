use secrecy::{ExposeSecret, SecretString};

use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Twilio account sid (`AC...`).
///
/// Invariant: non-empty after trimming. The sid is part of every resource URL.
pub struct AccountSid(String);

impl AccountSid {
    pub const FIELD: &'static str = "AccountSid";

    /// Create a validated [`AccountSid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sid.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Twilio API key sid (`SK...`), used as the Basic auth username for API-key credentials.
///
/// Invariant: non-empty after trimming.
pub struct ApiKeySid(String);

impl ApiKeySid {
    pub const FIELD: &'static str = "ApiKeySid";

    /// Create a validated [`ApiKeySid`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated sid.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug)]
/// Auth token or API-key secret.
///
/// Invariant: must not be empty (whitespace is preserved and allowed). The value is
/// redacted from `Debug` output.
pub struct AuthToken(SecretString);

impl AuthToken {
    pub const FIELD: &'static str = "AuthToken";

    /// Create a validated [`AuthToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(SecretString::from(value)))
    }

    /// Expose the secret for the Basic auth header.
    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug, Clone)]
/// Parsed phone number with an E.164 representation.
///
/// Descriptor phone fields are plain strings; use [`PhoneNumber::e164`] to fill them with
/// a normalized value. Equality, ordering, and hashing are based on the E.164 form.
pub struct PhoneNumber {
    raw: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    pub const FIELD: &'static str = "PhoneNumber";

    /// Parse and normalize a phone number into E.164.
    ///
    /// `default_region` is used when the input does not contain an explicit country prefix.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input = input.into();
        let raw = input.trim().to_owned();
        if raw.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }

        let parsed = phonenumber::parse(default_region, &raw)
            .map_err(|_| ValidationError::InvalidPhoneNumber { input: raw.clone() })?;

        let e164 = phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string();

        Ok(Self { raw, e164, parsed })
    }

    /// Raw input after trimming.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Normalized E.164 representation.
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// The parsed phone number from the `phonenumber` crate.
    pub fn parsed(&self) -> &phonenumber::PhoneNumber {
        &self.parsed
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.e164
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}

impl std::hash::Hash for PhoneNumber {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.e164.hash(state);
    }
}

impl std::cmp::PartialOrd for PhoneNumber {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl std::cmp::Ord for PhoneNumber {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.e164.cmp(&other.e164)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sid_newtypes_trim_and_validate() {
        let account = AccountSid::new("  AC123 ").unwrap();
        assert_eq!(account.as_str(), "AC123");
        assert!(AccountSid::new("  ").is_err());

        let key = ApiKeySid::new(" SK123 ").unwrap();
        assert_eq!(key.as_str(), "SK123");
        assert!(matches!(
            ApiKeySid::new(""),
            Err(ValidationError::Empty {
                field: ApiKeySid::FIELD
            })
        ));
    }

    #[test]
    fn auth_token_keeps_whitespace_and_redacts_debug() {
        let token = AuthToken::new(" secret ").unwrap();
        assert_eq!(token.expose(), " secret ");
        assert!(!format!("{token:?}").contains("secret "));
        assert!(AuthToken::new("").is_err());
    }

    #[test]
    fn phone_number_parsing_and_equality_use_e164() {
        let p1 = PhoneNumber::parse(None, "+14155552671").unwrap();
        let p2 = PhoneNumber::parse(None, "+1 415-555-2671").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1.e164(), "+14155552671");
        assert_eq!(p2.raw(), "+1 415-555-2671");

        let national = PhoneNumber::parse(Some(country::Id::US), "(415) 555-2671").unwrap();
        assert_eq!(String::from(national), "+14155552671");

        assert!(PhoneNumber::parse(None, "not-a-number").is_err());
        assert!(matches!(
            PhoneNumber::parse(None, "  "),
            Err(ValidationError::Empty {
                field: PhoneNumber::FIELD
            })
        ));
    }
}
