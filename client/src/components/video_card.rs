//! Catalog card for one video.
//!
//! DESIGN
//! ======
//! The whole card is a link to the watch page so keyboard and middle-click
//! navigation behave like any other anchor.

use leptos::prelude::*;

use crate::net::api::thumbnail_url;
use crate::net::types::Video;
use crate::pages::watch::watch_path;
use crate::util::format::{format_duration, format_upload_date};

/// A clickable card with thumbnail, duration badge, and upload date.
#[component]
pub fn VideoCard(video: Video) -> impl IntoView {
    let href = watch_path(&video.id);
    let thumbnail = thumbnail_url(&video);
    let duration = format_duration(video.duration);
    let uploaded = format!("Uploaded on {}", format_upload_date(&video.created_at));
    let alt = video.title.clone();

    view! {
        <a class="video-card" href=href>
            <span class="video-card__thumb">
                <img class="video-card__image" src=thumbnail alt=alt loading="lazy"/>
                <span class="video-card__play" aria-hidden="true">"▶ Watch"</span>
                <span class="video-card__duration">{duration}</span>
            </span>
            <span class="video-card__body">
                <span class="video-card__title">{video.title}</span>
                <span class="video-card__description">{video.description}</span>
                <span class="video-card__date">{uploaded}</span>
            </span>
        </a>
    }
}
