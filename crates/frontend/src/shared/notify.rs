//! Всплывающие уведомления пользователю
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 4000;

/// Сообщение об ошибке для пользователя
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    /// "Failed" / "Download unsuccessful"
    pub fn export_failed() -> Self {
        Self {
            title: "ລົ້ມແຫຼວ".to_string(),
            description: "ດາວໂຫລດບໍ່ສຳເລັດ".to_string(),
        }
    }
}

/// Fire-and-forget user notification
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

/// Shows the notice in a [`NoticeBanner`] and clears it after a timeout
#[derive(Clone, Copy)]
pub struct BannerNotifier {
    set_notice: WriteSignal<Option<Notice>>,
}

impl BannerNotifier {
    pub fn new(set_notice: WriteSignal<Option<Notice>>) -> Self {
        Self { set_notice }
    }
}

impl Notifier for BannerNotifier {
    fn notify(&self, notice: Notice) {
        let set_notice = self.set_notice;
        let shown = notice.clone();
        set_notice.set(Some(notice));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            // Не трогаем более новое уведомление
            set_notice.update(|current| {
                if current.as_ref() == Some(&shown) {
                    *current = None;
                }
            });
        });
    }
}

#[component]
pub fn NoticeBanner(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            view! {
                <div
                    role="alert"
                    style="position: fixed; top: 16px; right: 16px; z-index: 1000; min-width: 260px; padding: 12px 16px; border-radius: 6px; box-shadow: 0 2px 8px rgba(0,0,0,0.15); background: #fdecea; color: #b71c1c;"
                >
                    <div style="font-weight: 600; margin-bottom: 4px;">{n.title}</div>
                    <div style="font-size: 0.875rem;">{n.description}</div>
                </div>
            }
        })
    }
}
