use leptos::prelude::*;

#[component]
pub fn FeatureCard(label: &'static str) -> impl IntoView {
    view! {
        <div class="bg-ctp-surface0 border border-ctp-surface1 rounded-lg p-6 hover:border-ctp-blue transition-colors">
            <h4 class="text-lg font-semibold text-ctp-text text-center">{label}</h4>
        </div>
    }
}
