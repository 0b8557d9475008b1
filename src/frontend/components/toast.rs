use leptos::prelude::*;

use notes_landing::probe::{Notification, NotificationKind};

fn toast_color(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "bg-ctp-green/20 border-ctp-green text-ctp-green",
        NotificationKind::Error => "bg-ctp-red/20 border-ctp-red text-ctp-red",
        NotificationKind::Connectivity => "bg-ctp-yellow/20 border-ctp-yellow text-ctp-yellow",
    }
}

/// Non-blocking banner for the latest notification.
///
/// A newer notification replaces the shown one; dismissing clears it.
#[component]
pub fn Toast(notification: RwSignal<Option<Notification>>) -> impl IntoView {
    view! {
        {move || {
            notification
                .get()
                .map(|n| {
                    view! {
                        <div
                            role="status"
                            class=format!(
                                "fixed bottom-6 right-6 max-w-sm flex items-start gap-3 px-4 py-3 border rounded-lg shadow-lg {}",
                                toast_color(n.kind),
                            )
                        >
                            <span class="flex-1">{n.text.clone()}</span>
                            <button
                                class="text-ctp-subtext0 hover:text-ctp-text"
                                title="Dismiss"
                                on:click=move |_| notification.set(None)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
