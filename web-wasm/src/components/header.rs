//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="header-inner">
                <h1>"Magic Path"</h1>
                <h2>"Output"</h2>
            </div>
        </header>
    }
}
