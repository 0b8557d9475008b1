use leptos::prelude::*;
use thaw::*;

use notes_landing::landing::LandingContent;

use crate::components::{FeatureCard, Toast};
use crate::hooks::use_session_probe;

const CONTENT: LandingContent = LandingContent::standard();

#[component]
pub fn Landing() -> impl IntoView {
    let probe = use_session_probe();
    let activate = probe.activate;

    view! {
        <div class="container mx-auto px-6 py-16 flex flex-col items-center text-center gap-6">
            <h1 class="text-5xl font-bold bg-gradient-to-r from-ctp-mauve to-ctp-blue bg-clip-text text-transparent">
                {CONTENT.headline}
            </h1>

            <h3 class="text-xl text-ctp-subtext0">{CONTENT.subheadline}</h3>

            <Tooltip content="Checks whether you are signed in">
                <button
                    class="px-6 py-3 rounded-lg font-medium bg-ctp-blue text-ctp-base hover:bg-ctp-lavender transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                    disabled=move || probe.busy.get()
                    on:click=move |_| activate.run(())
                >
                    {move || if probe.busy.get() { "Checking..." } else { CONTENT.call_to_action }}
                </button>
            </Tooltip>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 w-full max-w-3xl mt-8">
                {CONTENT
                    .features
                    .iter()
                    .map(|card| view! { <FeatureCard label=card.label/> })
                    .collect_view()}
            </div>

            <Toast notification=probe.notification/>
        </div>
    }
}
