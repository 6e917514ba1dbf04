use crate::shared::api_utils::fetch_list;
use contracts::domain::a001_sale::dto::{SaleRecord, SALES_REPORT_PATH};

/// URL отчёта о продажах; пустой фильтр уходит как есть (`search=`)
pub fn sales_url(api_base: &str, filter: &str) -> String {
    format!(
        "{}{}?search={}",
        api_base,
        SALES_REPORT_PATH,
        urlencoding::encode(filter)
    )
}

/// Получить продажи по фильтру
pub async fn fetch_sales(api_base: &str, filter: &str) -> Result<Vec<SaleRecord>, String> {
    fetch_list(&sales_url(api_base, filter)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_passed_through() {
        assert_eq!(
            sales_url("http://localhost:3000", ""),
            "http://localhost:3000/get-sell/products?search="
        );
    }

    #[test]
    fn test_filter_is_url_encoded() {
        assert_eq!(
            sales_url("", "cafe & tea"),
            "/get-sell/products?search=cafe%20%26%20tea"
        );
        let lao = sales_url("", "ກາເຟ");
        assert!(lao.starts_with("/get-sell/products?search=%E0%BA"));
        assert!(lao.is_ascii());
    }
}
