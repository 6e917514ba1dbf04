mod card;
pub mod state;

use self::card::ProductCard;
use self::state::{create_state, grid_content, GridContent};
use crate::domain::a002_product::api::fetch_products;
use crate::shared::api_utils::api_base;
use crate::shared::config::AppConfig;
use crate::shared::list_state::FetchOutcome;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// "No products!"
pub const EMPTY_PLACEHOLDER: &str = "ບໍ່ມີລາຍການສິນຄ້າ!";

const GRID_CSS: &str = r#"
.product-grid { display: grid; gap: 16px; grid-template-columns: repeat(1, minmax(0, 1fr)); }
@media (min-width: 640px) { .product-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); } }
@media (min-width: 1024px) { .product-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); } }
@media (min-width: 1280px) { .product-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); } }
.product-grid__placeholder { grid-column: 1 / -1; display: flex; justify-content: center; align-items: center; min-height: 240px; color: #888; font-size: 1.25rem; }
"#;

/// Витрина товаров: один запрос при открытии
#[component]
pub fn ProductGrid() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let base = api_base(&config.api);
    let state = create_state();

    if let Some(ticket) = state.try_update(|s| s.begin_fetch()) {
        spawn_local(async move {
            let outcome = FetchOutcome::from_result(fetch_products(&base).await);
            if let FetchOutcome::Failed(e) = &outcome {
                log::warn!("Products fetch failed: {}", e);
            }
            state.try_update(|s| s.complete(ticket, outcome));
        });
    }

    view! {
        <style>{GRID_CSS}</style>
        <div class="product-grid">
            {move || match state.with(grid_content) {
                GridContent::Skeleton => (0..8).map(|_| view! {
                    <div style="height: 220px; border-radius: 8px; background: linear-gradient(90deg, #eee, #f5f5f5, #eee);"></div>
                }).collect_view().into_any(),
                GridContent::Placeholder => view! {
                    <div class="product-grid__placeholder">{EMPTY_PLACEHOLDER}</div>
                }.into_any(),
                GridContent::Cards => state.with(|s| {
                    s.items().iter().cloned().map(|product| view! {
                        <ProductCard product=product />
                    }).collect_view()
                }).into_any(),
            }}
        </div>
    }
}
