use serde::{Deserialize, Deserializer, Serialize};

/// Конверт ответа сервиса: `{ "data": [...] }`
///
/// Отсутствующее поле `data` или `null` читаются как пустой список.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_list_is_read() {
        let r: ListResponse<i32> = serde_json::from_str(r#"{"data":[1,2,3]}"#).unwrap();
        assert_eq!(r.into_inner(), vec![1, 2, 3]);
    }

    #[test]
    fn test_missing_or_null_data_is_empty() {
        let missing: ListResponse<i32> = serde_json::from_str("{}").unwrap();
        assert!(missing.data.is_empty());

        let null: ListResponse<i32> = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(null.data.is_empty());
    }

    #[test]
    fn test_wrong_shape_is_an_error() {
        let r: Result<ListResponse<i32>, _> = serde_json::from_str(r#"{"data":"oops"}"#);
        assert!(r.is_err());
    }
}
