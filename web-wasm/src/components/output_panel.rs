//! 解析結果の表示パネル

use leptos::prelude::*;
use magic_path_common::UploadSession;
use crate::view_model::OutputView;

#[component]
pub fn OutputPanel(session: RwSignal<UploadSession>) -> impl IntoView {
    let output = move || session.with(OutputView::from_session);

    move || match output() {
        OutputView::Described { description, details } => view! {
            <div class="output">
                <div class="card">
                    <p>{description}</p>
                    <div class="status-success">"✓ Succeeded"</div>
                </div>
                <div class="card">
                    <h3>"Detailed Analysis"</h3>
                    <dl class="details">
                        {details
                            .into_iter()
                            .map(|row| view! {
                                <div class="detail-row">
                                    <dt>{format!("{}:", row.label)}</dt>
                                    <dd>{row.value}</dd>
                                </div>
                            })
                            .collect_view()}
                    </dl>
                </div>
            </div>
        }
        .into_any(),
        OutputView::Analyzing => view! {
            <div class="output-empty">
                <div class="spinner"></div>
                <p>"Analyzing your image..."</p>
            </div>
        }
        .into_any(),
        OutputView::Placeholder => view! {
            <div class="output-empty">
                <p class="text-muted">"Upload an image to see the AI analysis"</p>
            </div>
        }
        .into_any(),
    }
}
