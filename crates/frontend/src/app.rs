use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the app configuration to both views via context.
    provide_context(load_config());

    view! {
        <AppRoutes />
    }
}
