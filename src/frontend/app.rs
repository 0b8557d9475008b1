use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};
use thaw::*;

use notes_landing::landing::LandingContent;

use crate::pages::Landing;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Set dark theme for Thaw UI components
    let theme = RwSignal::new(Theme::dark());

    view! {
        <ConfigProvider theme>
            <Title text=LandingContent::standard().title/>
            <Router>
                <main class="min-h-screen bg-ctp-base flex flex-col">
                    <div class="flex-1">
                        <Routes fallback=|| view! { <p class="p-6 text-ctp-subtext0">"Page not found"</p> }>
                            <Route path=path!("/") view=Landing/>
                        </Routes>
                    </div>

                    <footer class="py-6 px-6 border-t border-ctp-surface1 bg-ctp-surface0">
                        <p class="container mx-auto text-center text-xs text-ctp-overlay0">
                            "v" {env!("CARGO_PKG_VERSION")}
                        </p>
                    </footer>
                </main>
            </Router>
        </ConfigProvider>
    }
}
