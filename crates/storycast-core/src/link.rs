//! Download references and request URLs.
//!
//! The backend is inconsistent about what it returns as a file identifier: a bare
//! name (`v1.mp4`), a project-relative path (`batch_1/chapter-01.mp4`) or an
//! already-rooted reference (`/download/out_1.mp4`). `download_href` folds all of
//! these into one href without doubling the prefix or the project directory.

use anyhow::{Context, Result};
use url::Url;

/// Builds the href for a returned file, e.g. `/download/v1.mp4` or
/// `/download/<project>/<file>`. Path segments are percent-encoded.
pub fn download_href(prefix: &str, project: Option<&str>, file: &str) -> String {
    let prefix = format!("/{}", prefix.trim_matches('/'));
    let mut rest = file.trim();

    if let Some(stripped) = rest.strip_prefix(prefix.as_str()) {
        if prefix == "/" || stripped.is_empty() || stripped.starts_with('/') {
            rest = stripped;
        }
    }
    let rest = rest.trim_start_matches('/');

    let mut segments: Vec<&str> = Vec::new();
    if let Some(project) = project.map(|p| p.trim_matches('/')).filter(|p| !p.is_empty()) {
        let already_scoped = rest
            .strip_prefix(project)
            .is_some_and(|tail| tail.starts_with('/'));
        if !already_scoped {
            segments.extend(project.split('/').filter(|s| !s.is_empty()));
        }
    }
    segments.extend(rest.split('/').filter(|s| !s.is_empty()));

    let mut path = prefix.trim_end_matches('/').to_string();
    for segment in segments {
        path.push('/');
        path.push_str(&encode_segment(segment));
    }
    if path.is_empty() {
        path.push('/');
    }
    path
}

/// Percent-encodes one path segment the way `Url` encodes path segments.
fn encode_segment(segment: &str) -> String {
    let mut url = match Url::parse("http://localhost/") {
        Ok(u) => u,
        Err(_) => return segment.to_string(),
    };
    match url.path_segments_mut() {
        Ok(mut segs) => {
            segs.clear().push(segment);
        }
        Err(()) => return segment.to_string(),
    }
    url.path().trim_start_matches('/').to_string()
}

/// Resolves an endpoint path or href against the backend base URL.
pub fn resolve(base_url: &str, path: &str) -> Result<String> {
    let base = Url::parse(base_url).with_context(|| format!("invalid base URL: {base_url}"))?;
    let joined = base
        .join(path)
        .with_context(|| format!("cannot join {path} onto {base_url}"))?;
    Ok(joined.to_string())
}

/// Derives a local file name for a fetched download reference.
///
/// Uses the last path segment (percent-decoded), sanitized for Linux; falls back
/// to `video.mp4` when nothing usable remains.
pub fn local_file_name(href: &str) -> String {
    const DEFAULT_NAME: &str = "video.mp4";

    let last = href
        .split(['?', '#'])
        .next()
        .unwrap_or("")
        .rsplit('/')
        .find(|s| !s.is_empty())
        .unwrap_or("");
    let decoded = percent_decode(last);
    let sanitized = sanitize_file_name(&decoded);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_NAME.to_string()
    } else {
        sanitized
    }
}

fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let (hi, lo) = (bytes[i + 1], bytes[i + 2]);
            if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() {
                let digit = |b: u8| (b as char).to_digit(16).unwrap_or(0) as u8;
                out.push(digit(hi) << 4 | digit(lo));
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Replaces `/`, `\`, NUL and control characters with `_`, collapses runs of
/// `_`, trims dots and spaces, and caps the length at 255 bytes.
fn sanitize_file_name(name: &str) -> String {
    const NAME_MAX: usize = 255;

    let mut out = String::with_capacity(name.len());
    let mut prev_underscore = false;
    for c in name.chars() {
        let c = if c == '/' || c == '\\' || c.is_control() || c.is_whitespace() {
            '_'
        } else {
            c
        };
        if c == '_' {
            if !prev_underscore {
                out.push('_');
            }
            prev_underscore = true;
        } else {
            out.push(c);
            prev_underscore = false;
        }
    }

    let trimmed = out.trim_matches(|c| c == '.' || c == '_');
    let mut take = trimmed.len().min(NAME_MAX);
    while take > 0 && !trimmed.is_char_boundary(take) {
        take -= 1;
    }
    trimmed[..take].to_string()
}
