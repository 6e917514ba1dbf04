use crate::shared::components::table::format_amount;
use contracts::domain::a002_product::dto::ProductSummary;
use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn ProductCard(product: ProductSummary) -> impl IntoView {
    let in_stock = product.in_stock();
    let name = product.display_name().to_string();
    let price = product.price.map(format_amount);
    let qty = product.qty;

    view! {
        <Card attr:style=format!(
            "display: flex; flex-direction: column; gap: 6px; height: 100%; opacity: {};",
            if in_stock { "1" } else { "0.6" }
        )>
            {product.image.map(|src| view! {
                <img
                    src=src
                    alt=name.clone()
                    style="width: 100%; aspect-ratio: 1 / 1; object-fit: cover; border-radius: 4px;"
                />
            })}
            <div style="font-weight: 600;">{name.clone()}</div>
            {product.category.map(|c| view! {
                <div style="font-size: 0.8rem; color: #666;">{c}</div>
            })}
            <div style="display: flex; justify-content: space-between; margin-top: auto;">
                <span>{price.unwrap_or_default()}</span>
                {qty.map(|q| view! { <span style="color: #666;">{q}</span> })}
            </div>
        </Card>
    }
}
