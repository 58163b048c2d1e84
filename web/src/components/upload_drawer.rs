//! Claim document upload: drop zone, capped file list and claim form.
//! Only file metadata is kept; nothing leaves the browser.

use leptos::ev;
use leptos::prelude::*;
use web_sys::{DragEvent, FileList, HtmlInputElement};

use vanmitra_common::upload::{
    self, ClaimForm, ClaimKind, UploadQueue, UploadedFile, CLAIM_VILLAGES, REQUIRED_DOCUMENTS,
};

use crate::app::use_app;
use crate::timer::OwnedTimeout;

fn file_metadata(list: &FileList) -> Vec<UploadedFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|f| UploadedFile::new(f.name(), f.size().max(0.0) as u64, f.type_()))
        .collect()
}

#[component]
pub fn UploadDrawer() -> impl IntoView {
    let config = use_app().config;
    let queue = RwSignal::new(UploadQueue::with_cap(config.upload.max_files));
    let form = RwSignal::new(ClaimForm::default());
    let drag_over = RwSignal::new(false);
    let (banner, set_banner) = signal(false);
    let banner_timer = OwnedTimeout::new();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let add_files = move |list: FileList| {
        let batch = file_metadata(&list);
        let offered = batch.len();
        let taken = queue.try_update(|q| q.add_batch(batch)).unwrap_or(0);
        if taken < offered {
            tracing::warn!(offered, taken, "upload list full, extra files dropped");
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        drag_over.set(true);
    };
    let on_dragleave = move |_: DragEvent| drag_over.set(false);
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        drag_over.set(false);
        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            add_files(list);
        }
    };

    let on_browse = move |_: ev::MouseEvent| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };
    let on_pick = move |ev: ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        if let Some(list) = input.files() {
            add_files(list);
        }
        input.set_value("");
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let submitted = queue
            .try_update(|q| form.try_update(|f| f.submit(q)).unwrap_or(false))
            .unwrap_or(false);
        if submitted {
            set_banner.set(true);
            banner_timer.schedule(config.timing.banner(), move || set_banner.set(false));
        }
    };

    let can_submit = move || queue.with(|q| form.with(|f| f.can_submit(q)));
    let full = move || queue.with(UploadQueue::is_full);

    let file_rows = move || {
        queue.with(|q| {
            q.files()
                .iter()
                .enumerate()
                .map(|(i, file)| {
                    view! {
                        <li class="file-row">
                            <span class="file-icon">{file.icon()}</span>
                            <div class="file-meta">
                                <p class="file-name">{file.name.clone()}</p>
                                <p class="muted">{upload::format_file_size(file.size)}</p>
                            </div>
                            <button
                                type="button"
                                class="icon-btn"
                                title="Remove"
                                on:click=move |_| {
                                    queue.update(|q| {
                                        q.remove(i);
                                    })
                                }
                            >
                                "✕"
                            </button>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="upload-drawer">
            <Show when=move || banner.get()>
                <div class="banner banner-success">"✅ Documents uploaded successfully!"</div>
            </Show>

            <div
                class=move || match (drag_over.get(), full()) {
                    (_, true) => "drop-zone disabled",
                    (true, false) => "drop-zone drag-over",
                    (false, false) => "drop-zone",
                }
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                <input
                    node_ref=file_input
                    type="file"
                    multiple=true
                    accept=config.upload.accept.as_str()
                    style="display:none"
                    on:change=on_pick
                />
                <span class="drop-icon">"📁"</span>
                <p>"Drag and drop documents here"</p>
                <p class="muted">
                    {format!(
                        "PDF, images or Word documents. Max {} files, {}MB each",
                        config.upload.max_files,
                        config.upload.max_file_mb,
                    )}
                </p>
                <button type="button" class="btn btn-secondary" on:click=on_browse disabled=full>
                    "Browse Files"
                </button>
            </div>

            <form class="claim-form" on:submit=on_submit>
                <label class="field">
                    <span>"Full Name *"</span>
                    <input
                        type="text"
                        placeholder="Enter applicant name"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span>"Village *"</span>
                    <select
                        prop:value=move || form.with(|f| f.village.clone())
                        on:change=move |ev| form.update(|f| f.village = event_target_value(&ev))
                    >
                        <option value="">"Select village"</option>
                        {CLAIM_VILLAGES
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span>"Claim Type"</span>
                    <select
                        prop:value=move || form.with(|f| f.kind.value())
                        on:change=move |ev| {
                            if let Some(kind) = ClaimKind::from_value(&event_target_value(&ev)) {
                                form.update(|f| f.kind = kind);
                            }
                        }
                    >
                        {ClaimKind::ALL
                            .into_iter()
                            .map(|k| view! { <option value=k.value()>{k.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span>"Description"</span>
                    <textarea
                        rows="3"
                        placeholder="Describe the land and the claim"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </label>

                <Show when=move || queue.with(|q| !q.is_empty())>
                    <div class="file-list">
                        <h4 class="panel-heading">
                            {move || queue.with(|q| format!("Uploaded Files ({}/{})", q.len(), q.cap()))}
                        </h4>
                        <ul>{file_rows}</ul>
                    </div>
                </Show>

                <div class="requirements">
                    <h4>"📋 Required Documents"</h4>
                    <ul>
                        {REQUIRED_DOCUMENTS.into_iter().map(|d| view! { <li>{d}</li> }).collect_view()}
                    </ul>
                </div>

                <button type="submit" class="btn btn-primary btn-block" disabled=move || !can_submit()>
                    "📤 Submit Application"
                </button>
            </form>
        </div>
    }
}
