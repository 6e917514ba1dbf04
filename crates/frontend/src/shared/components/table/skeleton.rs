//! Заглушка таблицы на время загрузки
use leptos::prelude::*;

#[component]
pub fn TableSkeleton(
    /// Заголовки колонок
    headers: &'static [&'static str],
    #[prop(optional, default = 5)]
    rows: usize,
) -> impl IntoView {
    let columns = headers.len();
    view! {
        <div class="table-container" aria-busy="true">
            <table class="data-table" style="width: 100%; border-collapse: collapse;">
                <thead>
                    <tr style="background: #f5f5f5;">
                        {headers.iter().map(|h| view! {
                            <th style="border: 1px solid #ddd; padding: 8px;">{*h}</th>
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {(0..rows).map(|_| view! {
                        <tr>
                            {(0..columns).map(|_| view! {
                                <td style="border: 1px solid #ddd; padding: 8px;">
                                    <div style="height: 12px; border-radius: 4px; background: linear-gradient(90deg, #eee, #f5f5f5, #eee);"></div>
                                </td>
                            }).collect_view()}
                        </tr>
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
