//! Terminal results container: echoes each fragment to stderr as plain text.

use storycast_core::view::{HtmlPanel, ResultView};

pub struct ConsoleView {
    panel: HtmlPanel,
}

impl ConsoleView {
    pub fn new() -> Self {
        Self {
            panel: HtmlPanel::new(),
        }
    }
}

impl ResultView for ConsoleView {
    fn reveal(&self) {
        self.panel.reveal();
    }

    fn set_html(&self, html: &str) {
        self.panel.set_html(html);
        eprintln!("{}", plain_text(html));
    }
}

/// Strips tags and decodes the entities the renderer emits. `<li>` becomes a bullet line.
pub fn plain_text(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut rest = html;
    while let Some(start) = rest.find('<') {
        out.push_str(&rest[..start]);
        let Some(end) = rest[start..].find('>') else {
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let tag = &rest[start + 1..start + end];
        if tag == "li" {
            out.push_str("\n  - ");
        } else if tag == "pre" || tag == "/pre" || tag == "/p" {
            out.push('\n');
        }
        rest = &rest[start + end + 1..];
    }
    out.push_str(rest);

    let text = out
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    text.lines()
        .map(str::trim_end)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_strips_link_markup() {
        assert_eq!(
            plain_text("✅ Done! <a href=\"/download/v1.mp4\">Download video</a>"),
            "✅ Done! Download video"
        );
    }

    #[test]
    fn plain_text_lists_episodes() {
        let html = "<p>✅ Done! 1 episode.</p>\n<pre>Ep 1: A &amp; B</pre>\n<ul><li>Ep 1: <a href=\"x\">A</a></li></ul>";
        assert_eq!(plain_text(html), "✅ Done! 1 episode.\nEp 1: A & B\n  - Ep 1: A");
    }
}
