//! Выпадающее меню "Export"
use crate::shared::export::ExportFormat;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn ExportMenu(
    on_select: Callback<ExportFormat>,
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let is_open = RwSignal::new(false);

    view! {
        <div style="position: relative; display: inline-block;">
            <button
                style="display: inline-flex; align-items: center; gap: 6px; padding: 6px 12px; background: #2196F3; color: white; border: none; border-radius: 4px; cursor: pointer;"
                disabled=move || disabled.get()
                on:click=move |_| is_open.update(|open| *open = !*open)
            >
                {icon("download")}
                "Export"
            </button>
            <Show when=move || is_open.get()>
                <div style="position: absolute; right: 0; top: calc(100% + 4px); z-index: 10; min-width: 120px; background: white; border: 1px solid #ddd; border-radius: 4px; box-shadow: 0 2px 8px rgba(0,0,0,0.12);">
                    {ExportFormat::ALL.into_iter().map(|format| view! {
                        <div
                            style="padding: 8px 12px; cursor: pointer;"
                            data-key=format.menu_key()
                            on:click=move |_| {
                                is_open.set(false);
                                on_select.run(format);
                            }
                        >
                            {format.label()}
                        </div>
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
}
