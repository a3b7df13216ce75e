use dioxus::prelude::*;
use store::media::{download_name, is_video, resolve_url};

use crate::icons::{FaDownload, FaXmark};
use crate::Icon;

/// Attached media in upload order, each with a download link.
#[component]
pub fn MediaGallery(media: Vec<String>, media_base: String) -> Element {
    if media.is_empty() {
        return rsx! {};
    }

    let items: Vec<(String, String)> = media
        .iter()
        .map(|path| {
            let url = resolve_url(&media_base, path);
            let name = download_name(&url);
            (url, name)
        })
        .collect();

    rsx! {
        div {
            class: "media-gallery",
            for (url, name) in items {
                figure {
                    key: "{url}",
                    class: "media-item",
                    if is_video(&url) {
                        video { src: "{url}", controls: true }
                    } else {
                        img { src: "{url}", alt: "{name}" }
                    }
                    a {
                        class: "media-download",
                        href: "{url}",
                        download: "{name}",
                        target: "_blank",
                        title: "Download",
                        Icon { icon: FaDownload, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}

/// Editable list of media paths, each removable before saving.
#[component]
pub fn MediaPicker(
    media: Vec<String>,
    media_base: String,
    on_remove: EventHandler<usize>,
) -> Element {
    rsx! {
        div {
            class: "media-gallery editable",
            for (index, path) in media.iter().enumerate() {
                figure {
                    key: "{index}-{path}",
                    class: "media-item",
                    if is_video(path) {
                        video { src: resolve_url(&media_base, path), controls: true }
                    } else {
                        img { src: resolve_url(&media_base, path), alt: download_name(path) }
                    }
                    button {
                        class: "media-remove",
                        title: "Remove",
                        onclick: move |_| on_remove.call(index),
                        Icon { icon: FaXmark, width: 12, height: 12 }
                    }
                }
            }
        }
    }
}
