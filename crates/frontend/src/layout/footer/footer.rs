use chrono::Datelike;
use leptos::prelude::*;

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[component]
pub fn Footer(owner: String) -> impl IntoView {
    view! {
        <footer class="site-footer">
            "© " <span id="year">{current_year()}</span> " " {owner}
        </footer>
    }
}
