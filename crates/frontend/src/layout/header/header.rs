use crate::domain::a001_tab_controller::ui::TabBar;
use leptos::prelude::*;

#[component]
pub fn Header(title: String, tagline: Option<String>) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__brand">
                <h1 class="site-header__title">{title}</h1>
                {tagline.map(|text| view! { <p class="site-header__tagline">{text}</p> })}
            </div>
            <TabBar />
        </header>
    }
}
