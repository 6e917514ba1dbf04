/// Поиск для списков: значение применяется по Enter или кнопке
use leptos::prelude::*;

/// Значение фильтра, которое уходит в запрос
pub fn committed_filter(raw: &str) -> String {
    raw.trim().to_string()
}

/// `None` when the committed value equals the applied one: no refetch
pub fn filter_update(applied: &str, committed: String) -> Option<String> {
    (applied != committed).then_some(committed)
}

/// Поле поиска с кнопкой и очисткой.
///
/// Ввод сам по себе ничего не запрашивает: `on_commit` вызывается по Enter,
/// по кнопке поиска и при очистке.
#[component]
pub fn SearchInput(
    /// Текущий применённый фильтр (для подсветки поля)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_commit: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());

    let commit = move || on_commit.run(committed_filter(&input_value.get_untracked()));

    let is_filter_active = move || !value.get().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_commit.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center; gap: 6px;">
            <input
                type="search"
                placeholder=placeholder
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| set_input_value.set(event_target_value(&ev))
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        commit();
                    }
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 42px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
            <button
                style="padding: 6px 10px; border: 1px solid #ddd; border-radius: 4px; background: white; cursor: pointer; display: inline-flex; align-items: center;"
                on:click=move |_| commit()
                title="Search"
            >
                {crate::shared::icons::icon("search")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committed_filter_trims() {
        assert_eq!(committed_filter("  ກາເຟ "), "ກາເຟ");
        assert_eq!(committed_filter("   "), "");
        assert_eq!(committed_filter(""), "");
    }

    #[test]
    fn test_same_filter_is_not_reapplied() {
        assert_eq!(filter_update("ກາເຟ", "ກາເຟ".to_string()), None);
        assert_eq!(filter_update("", String::new()), None);
        assert_eq!(
            filter_update("ກາເຟ", "ນ້ຳ".to_string()),
            Some("ນ້ຳ".to_string())
        );
        assert_eq!(filter_update("ກາເຟ", String::new()), Some(String::new()));
    }
}
