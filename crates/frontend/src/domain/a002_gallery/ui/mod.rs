use crate::domain::a002_gallery::builder::GalleryEntry;
use crate::domain::a003_lightbox::service::use_lightbox;
use contracts::domain::a002_gallery::aggregate::{GalleryConfig, GalleryStatus, Thumbnail};
use leptos::prelude::*;

/// Gallery container for one project.
///
/// Renders nothing until the background scan finishes, then either a
/// placeholder or one thumbnail per discovered image.
#[component]
pub fn Gallery(entry: GalleryEntry) -> impl IntoView {
    let GalleryEntry { config, status } = entry;
    let project = config.project.clone();
    let max = config.max.to_string();
    let title = config.title.clone();

    let content = move || match status.get() {
        GalleryStatus::Pending => ().into_any(),
        GalleryStatus::Empty => view! {
            <div class="muted">
                "No images yet. Add files like "
                <code>{config.placeholder_file()}</code>
                " into "
                <code>{GalleryConfig::placeholder_dir()}</code>
                "."
            </div>
        }
        .into_any(),
        GalleryStatus::Ready(images) => config
            .thumbnails(&images)
            .into_iter()
            .map(|thumb| view! { <ThumbButton images=images.clone() thumb=thumb /> })
            .collect_view()
            .into_any(),
    };

    view! {
        <div class="gallery-block">
            {title.map(|title| view! { <h3 class="gallery-title">{title}</h3> })}
            <div
                class="gallery"
                data-project=project
                data-max=max
                data-images=move || status.with(|s| s.images_json())
            >
                {content}
            </div>
        </div>
    }
}

/// Clickable preview; opens the lightbox on a copy of the gallery's list.
#[component]
fn ThumbButton(images: Vec<String>, thumb: Thumbnail) -> impl IntoView {
    let lightbox = use_lightbox();
    let Thumbnail {
        idx,
        url,
        label,
        alt,
    } = thumb;
    let data_img = url.clone();
    let on_click = move |_| {
        lightbox.open(images.clone(), idx as i64);
    };

    view! {
        <button
            class="thumb"
            data-idx=idx.to_string()
            data-img=data_img
            aria-label=label
            on:click=on_click
        >
            <img loading="lazy" decoding="async" src=url alt=alt />
        </button>
    }
}
