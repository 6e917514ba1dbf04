use crate::domain::a001_sale::ui::SaleList;
use crate::domain::a002_product::ui::ProductGrid;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

pub const SHOP_PATH: &str = "/";
pub const SALES_REPORT_PATH: &str = "/report/sales";

#[component]
fn NavBar() -> impl IntoView {
    view! {
        <nav style="display: flex; gap: 16px; padding: 12px 16px; border-bottom: 1px solid #eee; margin-bottom: 16px;">
            <A href=SHOP_PATH attr:style="display: inline-flex; align-items: center; gap: 6px;">
                {icon("products")} "Shop"
            </A>
            <A href=SALES_REPORT_PATH attr:style="display: inline-flex; align-items: center; gap: 6px;">
                {icon("receipt")} "Sales"
            </A>
        </nav>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <NavBar />
            <main style="padding: 0 16px 16px;">
                <Routes fallback=|| "Page not found.">
                    <Route path=path!("/") view=ProductGrid />
                    <Route path=path!("/report/sales") view=SaleList />
                </Routes>
            </main>
        </Router>
    }
}
