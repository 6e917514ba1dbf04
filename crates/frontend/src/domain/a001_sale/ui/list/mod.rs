mod export_menu;
pub mod state;

use self::export_menu::ExportMenu;
use self::state::create_state;
use crate::domain::a001_sale::api::fetch_sales;
use crate::shared::api_utils::{api_base, fetch_bytes};
use crate::shared::components::table::{format_amount, TableSkeleton};
use crate::shared::config::AppConfig;
use crate::shared::date_utils::{format_sale_time, TABLE_DATETIME_FORMAT};
use crate::shared::export::{browser_renderer, BrowserDownload, ExportFormat, ExportPipeline, FontResource, PageSetup};
use crate::shared::list_state::FetchOutcome;
use crate::shared::list_utils::{filter_update, SearchInput};
use crate::shared::notify::{BannerNotifier, Notice, NoticeBanner};
use chrono::Local;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TABLE_HEADERS: &[&str] = &[
    "#",
    "Sell ID",
    "Product name",
    "Price",
    "qty",
    "TotalPrice",
    "Selled by",
    "Selled At",
];

const CELL: &str = "border: 1px solid #ddd; padding: 8px;";
const CELL_NUM: &str = "border: 1px solid #ddd; padding: 8px; text-align: right;";

/// Отчёт о продажах: поиск, таблица, итог и выгрузка
#[component]
pub fn SaleList() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let base = api_base(&config.api);
    let page = StoredValue::new(PageSetup::from_config(&config.export));

    let state = create_state();
    let (filter, set_filter) = signal(String::new());
    let (notice, set_notice) = signal::<Option<Notice>>(None);

    // Перезапрос при смене применённого фильтра
    Effect::new(move |_| {
        let filter = filter.get();
        let Some(ticket) = state.try_update(|s| s.list.begin_fetch()) else {
            return;
        };
        let base = base.clone();
        spawn_local(async move {
            let outcome = FetchOutcome::from_result(fetch_sales(&base, &filter).await);
            if let FetchOutcome::Failed(e) = &outcome {
                log::warn!("Sales fetch failed (search={:?}): {}", filter, e);
            }
            let applied = state
                .try_update(|s| s.list.complete(ticket, outcome))
                .unwrap_or(false);
            if !applied {
                log::debug!("Discarded stale sales response (search={:?})", filter);
            }
        });
    });

    // Встроенный шрифт PDF уже в состоянии; `export.font_url` подменяет его
    if let Some(font_url) = config.export.font_url.clone() {
        let font_family = config.export.font_family.clone();
        spawn_local(async move {
            let loaded = fetch_bytes(&font_url).await.and_then(|bytes| {
                FontResource::from_bytes(font_family, bytes).map_err(|e| e.to_string())
            });
            match loaded {
                Ok(font) => {
                    log::debug!("Export font loaded from {}", font_url);
                    state.try_update(|s| s.font = Some(font));
                }
                Err(e) => log::warn!(
                    "Export font unavailable ({}), keeping the bundled one: {}",
                    font_url,
                    e
                ),
            }
        });
    }

    let run_export = Callback::new(move |format: ExportFormat| {
        let Some((job, font)) =
            state.try_with_untracked(|s| (s.export_job(&Local::now()), s.font.clone()))
        else {
            return;
        };
        let renderer = browser_renderer(font, page.get_value());
        let pipeline = ExportPipeline::new(BrowserDownload, BannerNotifier::new(set_notice));
        pipeline.run(&renderer, &job, format);
    });

    let is_loading = move || state.with(|s| s.list.is_loading());

    view! {
        <div class="sale-list">
            <NoticeBanner notice=notice />
            <div style="display: flex; align-items: center; gap: 12px; margin-bottom: 12px; flex-wrap: wrap;">
                <h2 style="margin: 0; font-size: var(--font-size-h3); line-height: 1.2;">"Sales report"</h2>
                <SearchInput
                    value=filter
                    on_commit=Callback::new(move |text: String| {
                        if let Some(text) = filter.with_untracked(|applied| filter_update(applied, text)) {
                            set_filter.set(text);
                        }
                    })
                />
                <div style="margin-left: auto;">
                    <ExportMenu on_select=run_export disabled=Signal::derive(is_loading) />
                </div>
            </div>

            {move || if is_loading() {
                view! { <TableSkeleton headers=TABLE_HEADERS /> }.into_any()
            } else {
                let tz = Local;
                let rows = state.with(|s| {
                    s.list.items().iter().enumerate().map(|(i, sale)| {
                        let key = sale.id.to_string();
                        view! {
                            <tr data-key=key>
                                <td style=CELL_NUM>{i + 1}</td>
                                <td style=CELL>{sale.sell_id.to_string()}</td>
                                <td style=CELL>{sale.name.clone()}</td>
                                <td style=CELL_NUM>{format_amount(sale.price())}</td>
                                <td style=CELL_NUM>{sale.qty.map(|q| q.to_string()).unwrap_or_default()}</td>
                                <td style=CELL_NUM>{format_amount(sale.line_total())}</td>
                                <td style=CELL>{sale.username.clone()}</td>
                                <td style=CELL>{format_sale_time(sale.selled_at.as_ref(), &tz, TABLE_DATETIME_FORMAT)}</td>
                            </tr>
                        }
                    }).collect_view()
                });
                let total = state.with(|s| s.total());
                view! {
                    <div class="table-container">
                        <table class="data-table" style="width: 100%; border-collapse: collapse;">
                            <thead>
                                <tr style="background: #f5f5f5;">
                                    {TABLE_HEADERS.iter().map(|h| view! { <th style=CELL>{*h}</th> }).collect_view()}
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                        <div style="margin-top: 8px; text-align: right; font-weight: 600;">
                            "Total: " {format_amount(total)}
                        </div>
                    </div>
                }.into_any()
            }}
        </div>
    }
}
