use crate::domain::common::{numeric, RecordKey};
use serde::{Deserialize, Serialize};

pub const PRODUCTS_PATH: &str = "/get-products";

/// Товар для карточки на витрине
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    #[serde(default)]
    pub id: RecordKey,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "numeric::lenient_f64")]
    pub price: Option<f64>,

    /// Остаток на складе
    #[serde(default, deserialize_with = "numeric::lenient_i64")]
    pub qty: Option<i64>,

    /// URL картинки
    #[serde(default)]
    pub image: Option<String>,

    #[serde(default)]
    pub category: Option<String>,
}

impl ProductSummary {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn in_stock(&self) -> bool {
        self.qty.map(|q| q > 0).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::ListResponse;

    #[test]
    fn test_decode_products_keep_server_order() {
        let json = r#"{"data":[
            {"id": 9, "name": "ນ້ຳດື່ມ", "price": "5000", "qty": 0, "image": "/img/9.png"},
            {"id": "a1", "name": null, "category": "drinks"}
        ]}"#;
        let products = serde_json::from_str::<ListResponse<ProductSummary>>(json)
            .unwrap()
            .into_inner();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id.as_str(), "9");
        assert_eq!(products[0].price, Some(5000.0));
        assert!(!products[0].in_stock());
        assert_eq!(products[1].display_name(), "");
        assert!(products[1].in_stock());
        assert_eq!(products[1].category.as_deref(), Some("drinks"));
    }
}
