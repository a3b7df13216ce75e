use api::MediaFile;
use dioxus::prelude::*;
use store::access::can_edit;
use store::media::mime_from_url;
use store::{validate, NoteInput};

use crate::components::{use_toast, Button, ButtonVariant, Input, Label, Textarea, ToastOptions};
use crate::icons::FaXmark;
use crate::{
    log_activity, report_error, report_success, use_activity_log, use_api, use_auth, use_config,
    use_login_guard, ConfirmDialog, Icon, LogLevel, MediaPicker, Page,
};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Create a note, or edit one when `note_id` is set.
///
/// Newly picked files replace the note's media once uploaded; with nothing
/// picked the existing media (minus any removed) is kept.
#[component]
pub fn NoteFormView(
    #[props(default)] note_id: Option<String>,
    on_navigate: EventHandler<Page>,
) -> Element {
    let editing = note_id.is_some();
    let page = match &note_id {
        Some(id) => Page::EditNote(id.clone()),
        None => Page::NewNote,
    };
    use_login_guard(page, on_navigate);

    let mut id_signal = use_signal(|| note_id.clone());
    if *id_signal.peek() != note_id {
        id_signal.set(note_id.clone());
    }

    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut existing = use_signal(Vec::<String>::new);
    let mut picked = use_signal(Vec::<MediaFile>::new);
    let mut pending = use_signal(|| Option::<NoteInput>::None);
    let mut saving = use_signal(|| false);

    let auth = use_auth();
    let api = use_api();
    let media_base = use_config().media_base();
    let mut activity_log = use_activity_log();
    let toast_api = use_toast();

    let _loader = use_resource(move || {
        let id = id_signal();
        let api = api();
        async move {
            let Some(id) = id else {
                return;
            };
            match api.get_note(&id).await {
                Ok(note) => {
                    if !can_edit(auth.peek().user(), note.author_id()) {
                        toast_api.error(
                            "You can only edit your own notes".to_string(),
                            ToastOptions::new(),
                        );
                        on_navigate.call(Page::Notes);
                        return;
                    }
                    title.set(note.title);
                    content.set(note.content);
                    existing.set(note.media);
                }
                Err(e) => report_error(&mut activity_log, &toast_api, "Error loading note", e),
            }
        }
    });

    let handle_files = move |evt: FormEvent| {
        spawn(async move {
            let mut selected = Vec::new();
            for file in evt.files() {
                let name = file.name();
                match file.read_bytes().await {
                    Ok(bytes) => {
                        let content_type =
                            file.content_type().unwrap_or_else(|| mime_from_url(&name));
                        selected.push(
                            MediaFile::new(name, bytes.to_vec()).with_content_type(content_type),
                        );
                    }
                    Err(e) => report_error(
                        &mut activity_log,
                        &toast_api,
                        &format!("Could not read {name}"),
                        e,
                    ),
                }
            }
            log_activity(
                &mut activity_log,
                LogLevel::Info,
                &format!("Picked {} file(s)", selected.len()),
            );
            picked.set(selected);
        });
    };

    let handle_submit = move |_| {
        match validate::note(&title(), &content(), existing()) {
            Ok(input) => pending.set(Some(input)),
            Err(e) => {
                toast_api.error(e.to_string(), ToastOptions::new());
            }
        }
    };

    let handle_confirm = move |_| {
        let Some(mut input) = pending() else {
            return;
        };
        pending.set(None);
        let api = api();
        let files = picked();
        let id = id_signal();
        spawn(async move {
            saving.set(true);
            if !files.is_empty() {
                match api.upload_media(files).await {
                    Ok(urls) => input.media = urls,
                    Err(e) => {
                        report_error(&mut activity_log, &toast_api, "Failed to upload files", e);
                        saving.set(false);
                        return;
                    }
                }
            }
            let result = match &id {
                Some(id) => api.update_note(id, &input).await,
                None => api.create_note(&input).await,
            };
            match (result, id.is_some()) {
                (Ok(_), true) => {
                    report_success(&mut activity_log, &toast_api, "Note updated successfully");
                    on_navigate.call(Page::Notes);
                }
                (Ok(_), false) => {
                    report_success(&mut activity_log, &toast_api, "Note created successfully");
                    on_navigate.call(Page::Notes);
                }
                (Err(e), true) => {
                    report_error(&mut activity_log, &toast_api, "Error updating note", e)
                }
                (Err(e), false) => {
                    report_error(&mut activity_log, &toast_api, "Error creating note", e)
                }
            }
            saving.set(false);
        });
    };

    let picked_names: Vec<String> = picked().iter().map(|f| f.name.clone()).collect();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "card form-card",
                h1 { class: "view-title", if editing { "Edit Note" } else { "Share a New Note" } }

                div {
                    class: "form-field",
                    Label { html_for: "note-title", "Title" }
                    Input {
                        id: "note-title",
                        r#type: "text",
                        value: title(),
                        oninput: move |evt: FormEvent| title.set(evt.value()),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "note-content", "Content" }
                    Textarea {
                        id: "note-content",
                        rows: "6",
                        value: content(),
                        oninput: move |evt: FormEvent| content.set(evt.value()),
                    }
                }

                div {
                    class: "form-field",
                    Label { html_for: "note-media", "Media" }
                    input {
                        id: "note-media",
                        class: "file-input",
                        r#type: "file",
                        multiple: true,
                        accept: "image/*,video/*",
                        onchange: handle_files,
                    }
                }

                if picked_names.is_empty() {
                    MediaPicker {
                        media: existing(),
                        media_base: media_base,
                        on_remove: move |index: usize| {
                            existing.write().remove(index);
                        },
                    }
                } else {
                    ul {
                        class: "picked-files",
                        for (index, name) in picked_names.into_iter().enumerate() {
                            li {
                                key: "{index}-{name}",
                                span { "{name}" }
                                button {
                                    class: "media-remove",
                                    title: "Remove",
                                    onclick: move |_| {
                                        picked.write().remove(index);
                                    },
                                    Icon { icon: FaXmark, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }

                div {
                    class: "form-actions",
                    Button {
                        variant: ButtonVariant::Primary,
                        disabled: saving(),
                        onclick: handle_submit,
                        if saving() { "Saving..." } else if editing { "Update Note" } else { "Post Note" }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_navigate.call(Page::Notes),
                        "Cancel"
                    }
                }
            }

            if pending().is_some() {
                ConfirmDialog {
                    title: if editing { "Save changes to this note?".to_string() } else { "Post this note?".to_string() },
                    on_confirm: handle_confirm,
                    on_cancel: move |_| pending.set(None),
                }
            }
        }
    }
}
