use leptos::prelude::*;
use leptos::task::spawn_local;

use notes_landing::probe::{
    Activation, Notification, Notifier, SessionCheckResult, SessionProbe,
};

use crate::api::{GlooTransport, SESSION_API_ORIGIN};

/// Shows notifications by writing them into a signal read by `<Toast/>`.
struct SignalNotifier(RwSignal<Option<Notification>>);

impl Notifier for SignalNotifier {
    fn notify(&self, notification: &Notification) {
        self.0.set(Some(notification.clone()));
    }
}

/// Return type for use_session_probe hook
pub struct UseSessionProbeReturn {
    /// True while a session check is in flight
    pub busy: ReadSignal<bool>,
    /// Latest notification, cleared when dismissed
    pub notification: RwSignal<Option<Notification>>,
    /// Run the probe (coalesced while one is in flight)
    pub activate: Callback<()>,
}

/// Hook wiring the call-to-action control to the session probe
///
/// # Example
/// ```rust
/// let probe = use_session_probe();
///
/// view! {
///     <button on:click=move |_| probe.activate.run(()) disabled=probe.busy>
///         "Start Writing"
///     </button>
///     <Toast notification=probe.notification/>
/// }
/// ```
pub fn use_session_probe() -> UseSessionProbeReturn {
    let probe = SessionProbe::new(GlooTransport::new(SESSION_API_ORIGIN));
    let (busy, set_busy) = signal(false);
    let notification = RwSignal::new(None::<Notification>);

    let activate = Callback::new(move |_| {
        let probe = probe.clone();
        set_busy.set(true);

        spawn_local(async move {
            let notifier = SignalNotifier(notification);
            let activation = probe.activate(None, &notifier).await;

            if let Activation::Completed(SessionCheckResult::TransportError { description }) =
                &activation
            {
                web_sys::console::warn_1(
                    &format!("Session check failed: {}", description).into(),
                );
            }

            // A coalesced activation leaves the first one's flag in place
            set_busy.set(probe.in_flight().is_busy());
        });
    });

    UseSessionProbeReturn {
        busy,
        notification,
        activate,
    }
}
