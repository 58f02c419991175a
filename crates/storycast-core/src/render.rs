//! HTML fragments written into a results container.
//!
//! All service-provided text is escaped; playlist text is escaped only for
//! `&`, `<` and `>` so that it displays verbatim inside `<pre>`.

use crate::link::download_href;
use crate::response::{BatchResponse, Episode};

pub const PENDING_SINGLE: &str = "⏳ Creating video…";
pub const PENDING_BATCH: &str = "⏳ Creating episodes…";
pub const FAILURE_MARK: &str = "❌";
pub const FALLBACK_ERROR: &str = "Failed";
pub const INVALID_JSON: &str = "Invalid JSON";
pub const REQUEST_FAILED: &str = "Request failed";

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;").replace('\'', "&#39;")
}

/// `❌ <message>`; a missing or blank message renders the generic fallback.
pub fn error(message: Option<&str>) -> String {
    let message = message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(FALLBACK_ERROR);
    format!("{} {}", FAILURE_MARK, escape_text(message))
}

pub fn invalid_json() -> String {
    format!("{} {}", FAILURE_MARK, INVALID_JSON)
}

pub fn request_failed() -> String {
    format!("{} {}", FAILURE_MARK, REQUEST_FAILED)
}

/// Success line for the single flow; without an href the link is omitted.
pub fn single_success(href: Option<&str>) -> String {
    match href {
        Some(href) => format!(
            "✅ Done! <a href=\"{}\">Download video</a>",
            escape_attr(href)
        ),
        None => "✅ Done! (no download link returned)".to_string(),
    }
}

/// Display label and title for the episode at `index` (0-based), with fallbacks.
pub fn episode_label(index: usize, episode: &Episode) -> (String, String) {
    let number = index + 1;
    let chapter = episode
        .chapter
        .clone()
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| number.to_string());
    let title = episode
        .title
        .clone()
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| format!("Chapter {}", number));
    (chapter, title)
}

/// Href for a built episode, or None when it failed or carries no file.
pub fn episode_href(prefix: &str, project: Option<&str>, episode: &Episode) -> Option<String> {
    if episode.failed() {
        return None;
    }
    episode
        .file
        .as_deref()
        .map(str::trim)
        .filter(|f| !f.is_empty())
        .map(|file| download_href(prefix, project, file))
}

fn episode_item(prefix: &str, project: Option<&str>, index: usize, episode: &Episode) -> String {
    let (chapter, title) = episode_label(index, episode);
    let chapter = escape_text(&chapter);
    let title = escape_text(&title);
    if episode.failed() {
        return format!(
            "<li>Ep {}: {} {}</li>",
            chapter,
            title,
            error(episode.error.as_deref())
        );
    }
    match episode_href(prefix, project, episode) {
        Some(href) => format!(
            "<li>Ep {}: <a href=\"{}\">{}</a></li>",
            chapter,
            escape_attr(&href),
            title
        ),
        None => format!("<li>Ep {}: {}</li>", chapter, title),
    }
}

pub fn batch_success(prefix: &str, response: &BatchResponse) -> String {
    let project = response.project.as_deref();
    let count = response.episodes.len();
    let noun = if count == 1 { "episode" } else { "episodes" };

    let mut html = format!("<p>✅ Done! {} {}.", count, noun);
    if let Some(playlist) = response.playlist_text.as_deref() {
        html.push_str(" Playlist text (copy to YouTube description):</p>\n<pre>");
        html.push_str(&escape_text(playlist));
        html.push_str("</pre>\n");
    } else {
        html.push_str("</p>\n");
    }

    html.push_str("<ul>");
    for (index, episode) in response.episodes.iter().enumerate() {
        html.push_str(&episode_item(prefix, project, index, episode));
    }
    html.push_str("</ul>");
    html
}
