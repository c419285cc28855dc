//! Log Panel Component
//!
//! Collapsible footer showing the session's buffered log lines.

use leptos::prelude::*;

/// Buffered lines from the installed logger, oldest first
fn buffered_lines() -> Vec<String> {
    rolling_logger::logger().map(|logger| logger.recent()).unwrap_or_default()
}

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move |_: web_sys::MouseEvent| {
        let recent = buffered_lines();
        log::debug!("[LOG_PANEL] Showing {} buffered line(s)", recent.len());
        set_lines.set(recent);
    };

    view! {
        <details class="log-panel">
            <summary on:click=refresh>"Session log"</summary>
            <button class="log-refresh-btn" on:click=refresh>"Refresh"</button>
            <pre class="log-lines">
                {move || lines.get().join("\n")}
            </pre>
        </details>
    }
}
