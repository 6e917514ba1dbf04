use crate::shared::api_utils::fetch_list;
use contracts::domain::a002_product::dto::{ProductSummary, PRODUCTS_PATH};

pub fn products_url(api_base: &str) -> String {
    format!("{}{}", api_base, PRODUCTS_PATH)
}

/// Получить витрину товаров (порядок как на сервере)
pub async fn fetch_products(api_base: &str) -> Result<Vec<ProductSummary>, String> {
    fetch_list(&products_url(api_base)).await
}
