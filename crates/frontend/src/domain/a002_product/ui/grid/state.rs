use crate::shared::list_state::{ListPhase, ListState};
use contracts::domain::a002_product::dto::ProductSummary;
use leptos::prelude::*;

pub type ProductGridState = ListState<ProductSummary>;

/// Что показывает сетка в текущей фазе
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridContent {
    Skeleton,
    Cards,
    /// Одна заглушка на всю ширину вместо карточек
    Placeholder,
}

pub fn grid_content(state: &ProductGridState) -> GridContent {
    match state.phase() {
        ListPhase::Idle | ListPhase::Loading => GridContent::Skeleton,
        ListPhase::Populated => GridContent::Cards,
        ListPhase::Empty => GridContent::Placeholder,
    }
}

pub fn create_state() -> RwSignal<ProductGridState> {
    RwSignal::new(ProductGridState::default())
}
