use serde::Deserialize;
use serde::de::Error as DeError;

/// JSON scalar Twilio sends as either a string or a number (`"duration": "6"` and
/// `"channels": 1` both occur).
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`-0.0025` stays `"-0.0025"`, `10.00` stays `"10.00"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonScalar(String);

impl JsonScalar {
    pub fn into_string(self) -> String {
        self.0
    }
}

impl<'de> Deserialize<'de> for JsonScalar {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom("expected JSON string or number")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        value: Option<JsonScalar>,
    }

    fn parse(json: &str) -> Option<String> {
        serde_json::from_str::<Holder>(json)
            .unwrap()
            .value
            .map(JsonScalar::into_string)
    }

    #[test]
    fn keeps_numeric_token_verbatim() {
        assert_eq!(parse(r#"{"value": 10.00}"#).as_deref(), Some("10.00"));
        assert_eq!(parse(r#"{"value": -0.0025}"#).as_deref(), Some("-0.0025"));
    }

    #[test]
    fn unwraps_strings_and_nulls() {
        assert_eq!(parse(r#"{"value": "6"}"#).as_deref(), Some("6"));
        assert_eq!(parse(r#"{"value": null}"#), None);
    }

    #[test]
    fn rejects_other_json_types() {
        assert!(serde_json::from_str::<Holder>(r#"{"value": true}"#).is_err());
        assert!(serde_json::from_str::<Holder>(r#"{"value": {}}"#).is_err());
    }
}
