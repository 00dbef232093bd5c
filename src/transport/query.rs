use url::form_urlencoded;

use crate::domain::{Descriptor, QueryValue};

/// Encode a descriptor's query fields as `Name=value&Name=value`.
///
/// Fields are emitted in declaration order. Empty strings and empty elements are skipped;
/// a repeated field emits its name once per element. Names are written verbatim so that
/// inequality filters such as `DateSent<` survive; values are form-urlencoded.
pub fn encode_query(descriptor: &dyn Descriptor) -> String {
    let fields = descriptor.query();
    let mut pairs = Vec::<String>::new();

    for (name, value) in fields.iter() {
        match value {
            QueryValue::One(value) => push_pair(&mut pairs, name, value),
            QueryValue::Many(values) => {
                for value in values.iter() {
                    push_pair(&mut pairs, name, value);
                }
            }
        }
    }

    pairs.join("&")
}

fn push_pair(pairs: &mut Vec<String>, name: &str, value: &str) {
    if value.is_empty() {
        return;
    }
    let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
    pairs.push(format!("{name}={encoded}"));
}
