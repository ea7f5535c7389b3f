//! アップロードエリアコンポーネント
//!
//! クリックでのファイル選択とドラッグ&ドロップはどちらも on_file に渡すだけで、
//! 検証はセッション側で行う。

use leptos::html;
use leptos::prelude::*;
use magic_path_common::UploadSession;
use web_sys::{DragEvent, File, HtmlInputElement};
use crate::view_model;

#[component]
pub fn UploadArea<F, C>(
    session: RwSignal<UploadSession>,
    on_file: F,
    on_clear: C,
) -> impl IntoView
where
    F: Fn(File) + 'static + Clone + Send + Sync,
    C: Fn(()) + 'static + Clone + Send + Sync,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let has_preview = move || session.with(|s| s.preview().is_some());
    let preview_src = move || {
        session.with(|s| s.preview().map(|p| p.as_str().to_string()).unwrap_or_default())
    };
    let file_name = move || session.with(view_model::file_name);

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_is_dragover.set(false);
    };

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            set_is_dragover.set(false);

            let file = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                on_file(file);
            }
        }
    };

    let on_change = {
        let on_file = on_file.clone();
        move |ev: web_sys::Event| {
            let input: HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                on_file(file);
            }
            // 同じファイルを選び直しても change が発火するように
            input.set_value("");
        }
    };

    let drop_on_zone = on_drop.clone();
    let drop_on_preview = on_drop;

    let open_file_selector = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="file-name">
            <input
                type="text"
                readonly=true
                placeholder="Choose an image file..."
                prop:value=file_name
            />
        </div>

        <input
            node_ref=input_ref
            type="file"
            accept="image/*"
            class="hidden"
            on:change=on_change
        />

        <Show
            when=has_preview
            fallback=move || {
                let drop_on_zone = drop_on_zone.clone();
                view! {
                    <div
                        class=move || {
                            if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
                        }
                        on:dragenter=on_drag_over
                        on:dragover=on_drag_over
                        on:dragleave=on_drag_leave
                        on:drop=drop_on_zone
                        on:click=open_file_selector
                    >
                        <div class="upload-icon">"🖼"</div>
                        <p>
                            {move || if is_dragover.get() {
                                "Drop your image here"
                            } else {
                                "Drag & drop or click to upload"
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="preview">
                <div class="preview-header">
                    <span class="text-muted">
                        {move || format!("PREVIEW - {}", file_name().to_uppercase())}
                    </span>
                    <button
                        class="btn btn-link"
                        on:click={
                            let on_clear = on_clear.clone();
                            move |_| on_clear(())
                        }
                    >
                        "✕ Clear file"
                    </button>
                </div>
                <div
                    class="preview-frame"
                    on:dragenter=on_drag_over
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=drop_on_preview.clone()
                >
                    <img src=preview_src alt="Preview" />
                </div>
            </div>
        </Show>
    }
}
