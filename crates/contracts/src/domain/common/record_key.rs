use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Идентификатор записи, как его отдаёт сервис
///
/// Сервис присылает идентификаторы то строкой, то числом; храним строкой.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordKey(pub String);

impl RecordKey {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Value>::deserialize(deserializer)? {
            None | Some(Value::Null) => Ok(RecordKey::default()),
            Some(Value::String(s)) => Ok(RecordKey(s)),
            Some(Value::Number(n)) => Ok(RecordKey(n.to_string())),
            Some(other) => Err(serde::de::Error::custom(format!(
                "invalid record key: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_and_number_keys() {
        let k: RecordKey = serde_json::from_str(r#""S-001""#).unwrap();
        assert_eq!(k.as_str(), "S-001");
        let k: RecordKey = serde_json::from_str("42").unwrap();
        assert_eq!(k.to_string(), "42");
        let k: RecordKey = serde_json::from_str("null").unwrap();
        assert!(k.is_empty());
    }

    #[test]
    fn test_object_key_rejected() {
        let r: Result<RecordKey, _> = serde_json::from_str(r#"{"a":1}"#);
        assert!(r.is_err());
    }
}
