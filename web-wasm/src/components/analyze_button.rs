//! 解析ボタン

use leptos::prelude::*;
use magic_path_common::UploadSession;
use crate::view_model;

#[component]
pub fn AnalyzeButton<FA>(session: RwSignal<UploadSession>, on_analyze: FA) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <button
            class="btn btn-primary btn-block"
            disabled=move || session.with(|s| !s.can_analyze())
            on:click={
                let on_analyze = on_analyze.clone();
                move |_| on_analyze(())
            }
        >
            {move || session.with(view_model::analyze_button_label)}
        </button>
    }
}
