use crate::domain::common::{numeric, timestamp, RecordKey, SaleTimestamp};
use serde::{Deserialize, Deserializer, Serialize};

/// Endpoint of the sales report (`?search=<text>` is appended by the client)
pub const SALES_REPORT_PATH: &str = "/get-sell/products";

/// Строка продажи, как её отдаёт сервис отчётов
///
/// Запись только для чтения. Цена и количество читаются мягко: пропущенное
/// или нечисловое значение становится `None` и в расчётах считается нулём.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(default)]
    pub id: RecordKey,

    #[serde(default)]
    pub sell_id: RecordKey,

    #[serde(default, deserialize_with = "text_or_empty")]
    pub name: String,

    /// Цена за единицу
    #[serde(rename = "sellPrice", default, deserialize_with = "numeric::lenient_f64")]
    pub sell_price: Option<f64>,

    #[serde(default, deserialize_with = "numeric::lenient_i64")]
    pub qty: Option<i64>,

    /// Продавец
    #[serde(default, deserialize_with = "text_or_empty")]
    pub username: String,

    #[serde(default, deserialize_with = "timestamp::lenient")]
    pub selled_at: Option<SaleTimestamp>,
}

impl SaleRecord {
    pub fn price(&self) -> f64 {
        self.sell_price.unwrap_or(0.0)
    }

    pub fn quantity(&self) -> i64 {
        self.qty.unwrap_or(0)
    }

    /// price × qty, missing values count as zero
    pub fn line_total(&self) -> f64 {
        self.price() * self.quantity() as f64
    }
}

/// Grand total over the loaded record set
pub fn sales_total(records: &[SaleRecord]) -> f64 {
    records
        .iter()
        .fold(0.0, |sum, record| sum + record.line_total())
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ListResponse;

    fn record(qty: Option<i64>, price: Option<f64>) -> SaleRecord {
        SaleRecord {
            qty,
            sell_price: price,
            ..Default::default()
        }
    }

    #[test]
    fn test_sales_total_example() {
        let records = vec![record(Some(2), Some(1000.0)), record(Some(0), Some(500.0))];
        assert_eq!(sales_total(&records), 2000.0);
    }

    #[test]
    fn test_missing_values_count_as_zero() {
        let records = vec![
            record(None, Some(1000.0)),
            record(Some(3), None),
            record(Some(4), Some(250.0)),
        ];
        assert_eq!(sales_total(&records), 1000.0);
        assert_eq!(sales_total(&[]), 0.0);
    }

    #[test]
    fn test_decode_service_payload() {
        let json = r#"{
            "data": [
                {"id": 1, "sell_id": "S-0001", "name": "ເຂົ້າຈີ່", "sellPrice": 15000,
                 "qty": 2, "username": "ນາງ ແກ້ວ", "selled_at": "2024-03-15T14:02:26.000Z"},
                {"id": "2", "sell_id": 7, "name": null, "sellPrice": "abc",
                 "qty": "3", "selled_at": "not a date"},
                {"id": 3}
            ]
        }"#;
        let response: ListResponse<SaleRecord> = serde_json::from_str(json).unwrap();
        let rows = response.into_inner();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].id.as_str(), "1");
        assert_eq!(rows[0].name, "ເຂົ້າຈີ່");
        assert_eq!(rows[0].line_total(), 30000.0);
        assert!(rows[0].selled_at.is_some());

        assert_eq!(rows[1].sell_id.as_str(), "7");
        assert_eq!(rows[1].name, "");
        assert_eq!(rows[1].sell_price, None);
        assert_eq!(rows[1].qty, Some(3));
        assert_eq!(rows[1].line_total(), 0.0);
        assert_eq!(rows[1].selled_at, None);

        assert_eq!(rows[2], SaleRecord { id: RecordKey::new("3"), ..Default::default() });
        assert_eq!(sales_total(&rows), 30000.0);
    }
}
