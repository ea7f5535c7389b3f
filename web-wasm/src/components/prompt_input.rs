//! プロンプト入力欄

use leptos::prelude::*;
use magic_path_common::{Event, UploadSession};
use crate::notify::notify_error;

#[component]
pub fn PromptInput(session: RwSignal<UploadSession>) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for="prompt">"Prompt (optional)"</label>
            <input
                type="text"
                id="prompt"
                placeholder="Ask something about the image..."
                prop:value=move || session.with(|s| s.prompt().to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    let event = Event::SetPrompt(value);
                    if let Some(Err(err)) = session.try_update(|s| s.handle(event)) {
                        notify_error(&err);
                    }
                }
            />
        </div>
    }
}
