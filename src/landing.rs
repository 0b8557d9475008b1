//! Static marketing content for the landing page.
//!
//! The same content feeds the Leptos page and the server-rendered fallback
//! page, so both always show identical copy.

use crate::probe::{CHECK_SESSION_PATH, CONNECTIVITY_MESSAGE};

/// One of the feature cards under the hero section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureCard {
    pub label: &'static str,
}

/// Fixed copy shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LandingContent {
    pub title: &'static str,
    pub headline: &'static str,
    pub subheadline: &'static str,
    pub features: [FeatureCard; 3],
    pub call_to_action: &'static str,
}

impl LandingContent {
    pub const fn standard() -> Self {
        Self {
            title: "Notes",
            headline: "Your notes, locked and loaded",
            subheadline: "Fast. Secure. Yours",
            features: [
                FeatureCard { label: "Secure" },
                FeatureCard { label: "Fast" },
                FeatureCard {
                    label: "Cross-platform",
                },
            ],
            call_to_action: "Start Writing",
        }
    }
}

impl Default for LandingContent {
    fn default() -> Self {
        Self::standard()
    }
}

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Session check wired to the call-to-action of the rendered page.
///
/// Same rules as `classify`: one GET with ambient cookies, `message` on
/// 2xx, `detail` otherwise, the generic connectivity text for anything
/// else. Overlapping clicks are ignored while a check is in flight.
const SESSION_CHECK_SCRIPT: &str = r#"(() => {
    const endpoint = __ENDPOINT__;
    const connectivity = __CONNECTIVITY__;
    const button = document.querySelector("button.start");
    const toast = document.querySelector(".toast");
    const toastText = toast.querySelector(".toast-text");
    const show = (v) => (typeof v === "string" ? v : JSON.stringify(v));

    toast.querySelector("button").addEventListener("click", () => {
        toast.hidden = true;
    });

    button.addEventListener("click", async () => {
        if (button.disabled) return;
        button.disabled = true;
        let text = connectivity;
        try {
            const response = await fetch(endpoint, { credentials: "include" });
            const data = await response.json();
            if (response.ok && data.message != null) {
                text = "Success: " + show(data.message);
            } else if (!response.ok && data.detail != null) {
                text = "Error: " + show(data.detail);
            } else {
                console.warn("Session check returned an unexpected body", response.status);
            }
        } catch (err) {
            console.warn("Session check did not complete", err);
        } finally {
            button.disabled = false;
        }
        toastText.textContent = text;
        toast.hidden = false;
    });
})();"#;

/// Encode a string as a JavaScript string literal safe inside `<script>`.
pub fn js_string(input: &str) -> String {
    serde_json::Value::from(input)
        .to_string()
        .replace("</", "<\\/")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

/// Render the landing page as a complete HTML document.
///
/// `session_origin` is the session service the call-to-action checks
/// against. Output depends only on the arguments.
pub fn render_html(content: &LandingContent, session_origin: &str) -> String {
    let cards: String = content
        .features
        .iter()
        .map(|card| {
            format!(
                "        <div class=\"card\"><h4 class=\"card-heading\">{}</h4></div>\n",
                escape_html(card.label)
            )
        })
        .collect();

    let endpoint = format!(
        "{}{}",
        session_origin.trim_end_matches('/'),
        CHECK_SESSION_PATH
    );
    let script = SESSION_CHECK_SCRIPT
        .replace("__ENDPOINT__", &js_string(&endpoint))
        .replace("__CONNECTIVITY__", &js_string(CONNECTIVITY_MESSAGE));

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         \x20   <meta charset=\"utf-8\">\n\
         \x20   <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         \x20   <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <main class=\"container\">\n\
         \x20   <h1>{headline}</h1>\n\
         \x20   <h3 class=\"properties\">{subheadline}</h3>\n\
         \x20   <button class=\"start\" type=\"button\">{cta}</button>\n\
         \x20   <div class=\"property-cards\">\n\
         {cards}\
         \x20   </div>\n\
         \x20   <div class=\"toast\" role=\"status\" hidden>\
         <span class=\"toast-text\"></span>\
         <button type=\"button\" title=\"Dismiss\">&#10005;</button></div>\n\
         </main>\n\
         <script>\n{script}\n</script>\n\
         </body>\n\
         </html>\n",
        title = escape_html(content.title),
        headline = escape_html(content.headline),
        subheadline = escape_html(content.subheadline),
        cta = escape_html(content.call_to_action),
        cards = cards,
        script = script,
    )
}
