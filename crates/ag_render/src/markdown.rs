//! Renderer for the bounded markdown subset the article prompts ask for:
//! `**bold**` spans, unordered lists (`*`, `-` or `+` markers) and
//! blank-line-delimited paragraphs. Anything else passes through as text.

/// Convert a markdown-subset string into an HTML fragment.
///
/// Bold spans are converted globally first, so list/paragraph
/// classification below sees `<strong>` tags rather than literal `**`.
/// The line pass is a two-state machine: either accumulating a paragraph
/// or inside an open `<ul>`, with explicit flushes between the two.
pub fn markdown_to_html(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let text = convert_bold(text);

    let mut writer = Writer::default();
    for line in text.split('\n') {
        let stripped = line.trim();

        match list_item(stripped) {
            // A line that begins with an already-converted bold tag is
            // never treated as a list item, even if it matches the marker
            // pattern.
            Some(item) if !stripped.starts_with("<strong>") => writer.push_item(item),
            _ => writer.push_line(stripped),
        }
    }
    let result = writer.finish();

    // Nothing structural came out (e.g. whitespace-only input): fall back
    // to wrapping each blank-line-delimited block in its own paragraph so
    // callers never receive raw unwrapped text.
    if result.is_empty() || !result.contains('<') {
        return text
            .split("\n\n")
            .filter_map(|block| {
                let block = block.trim();
                if block.is_empty() {
                    None
                } else {
                    Some(format!("<p>{}</p>", block))
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    result
}

/// Replace every `**span**` with `<strong>span</strong>`.
///
/// Matches the non-greedy pair rule: the nearest closing `**` with at
/// least one character of content wins, and a span never crosses a line
/// boundary. Unpaired markers are left as literal text.
fn convert_bold(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;

    loop {
        let Some(open) = rest.find("**") else {
            out.push_str(rest);
            break;
        };
        let after = &rest[open + 2..];
        let line_end = after.find('\n').unwrap_or(after.len());

        match find_close(&after[..line_end]) {
            Some(close) => {
                out.push_str(&rest[..open]);
                out.push_str("<strong>");
                out.push_str(&after[..close]);
                out.push_str("</strong>");
                rest = &after[close + 2..];
            }
            None => {
                // No closer on this line; emit one byte and rescan so a
                // later overlapping marker can still pair up.
                out.push_str(&rest[..open + 1]);
                rest = &rest[open + 1..];
            }
        }
    }

    out
}

// First "**" preceded by at least one content byte.
fn find_close(s: &str) -> Option<usize> {
    match s.find("**") {
        Some(0) => s[1..].find("**").map(|pos| pos + 1),
        other => other,
    }
}

/// If the trimmed line is a list item, return its content (the text after
/// the marker and its whitespace).
fn list_item(stripped: &str) -> Option<&str> {
    let rest = stripped.strip_prefix(|c| matches!(c, '*' | '-' | '+'))?;
    let content = rest.trim_start();
    if content.len() == rest.len() || content.is_empty() {
        // No whitespace after the marker, or nothing after it at all.
        return None;
    }
    Some(content)
}

#[derive(Default)]
struct Writer {
    parts: Vec<String>,
    in_list: bool,
    paragraph: Vec<String>,
}

impl Writer {
    fn push_item(&mut self, content: &str) {
        if !self.in_list {
            self.flush_paragraph();
            self.parts.push("<ul>".to_string());
            self.in_list = true;
        }
        self.parts.push(format!("<li>{}</li>", content));
    }

    fn push_line(&mut self, stripped: &str) {
        self.close_list();
        if stripped.is_empty() {
            self.flush_paragraph();
        } else {
            self.paragraph.push(stripped.to_string());
        }
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        let text = text.trim();
        if !text.is_empty() {
            self.parts.push(format!("<p>{}</p>", text));
        }
        self.paragraph.clear();
    }

    fn close_list(&mut self) {
        if self.in_list {
            self.parts.push("</ul>".to_string());
            self.in_list = false;
        }
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.flush_paragraph();
        self.parts.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(markdown_to_html(""), "");
    }

    #[test]
    fn whitespace_only_input_renders_nothing() {
        assert_eq!(markdown_to_html("\n  \n\n"), "");
    }

    #[test]
    fn plain_text_becomes_paragraphs() {
        let html = markdown_to_html("First paragraph.\n\nSecond paragraph.");
        assert_eq!(html, "<p>First paragraph.</p>\n<p>Second paragraph.</p>");
        assert!(!html.contains("<ul>"));
    }

    #[test]
    fn adjacent_lines_join_into_one_paragraph() {
        let html = markdown_to_html("line one\nline two");
        assert_eq!(html, "<p>line one line two</p>");
    }

    #[test]
    fn bold_spans_are_converted() {
        assert_eq!(
            markdown_to_html("This is **important** text."),
            "<p>This is <strong>important</strong> text.</p>"
        );
    }

    #[test]
    fn unpaired_bold_marker_stays_literal() {
        assert_eq!(
            markdown_to_html("a ** b"),
            "<p>a ** b</p>"
        );
    }

    #[test]
    fn bold_span_does_not_cross_lines() {
        let html = markdown_to_html("open **here\nand close** there");
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn consecutive_list_lines_share_one_list() {
        let html = markdown_to_html("* one\n* two\n* three");
        assert_eq!(
            html,
            "<ul>\n<li>one</li>\n<li>two</li>\n<li>three</li>\n</ul>"
        );
        assert_eq!(html.matches("<ul>").count(), 1);
    }

    #[test]
    fn all_three_markers_are_accepted() {
        let html = markdown_to_html("* star\n- dash\n+ plus");
        assert_eq!(
            html,
            "<ul>\n<li>star</li>\n<li>dash</li>\n<li>plus</li>\n</ul>"
        );
    }

    #[test]
    fn marker_without_whitespace_is_not_a_list_item() {
        assert_eq!(markdown_to_html("*emphasis maybe"), "<p>*emphasis maybe</p>");
    }

    #[test]
    fn list_interrupts_and_resumes_paragraphs() {
        let html = markdown_to_html("intro text\n* item\nclosing text");
        assert_eq!(
            html,
            "<p>intro text</p>\n<ul>\n<li>item</li>\n</ul>\n<p>closing text</p>"
        );
    }

    #[test]
    fn bold_runs_before_list_classification() {
        // The leading "**Note:**" becomes a <strong> tag first, so the
        // line is paragraph text, not a one-item list.
        let html = markdown_to_html("**Note:** see below");
        assert_eq!(html, "<p><strong>Note:</strong> see below</p>");
    }

    #[test]
    fn list_items_keep_inline_bold() {
        let html = markdown_to_html("* **Playful** cats\n* Independent");
        assert_eq!(
            html,
            "<ul>\n<li><strong>Playful</strong> cats</li>\n<li>Independent</li>\n</ul>"
        );
    }

    #[test]
    fn trailing_list_is_closed() {
        let html = markdown_to_html("text\n* last item");
        assert!(html.ends_with("</ul>"));
    }

    #[test]
    fn nearest_closer_wins() {
        assert_eq!(
            markdown_to_html("**a** and **b**"),
            "<p><strong>a</strong> and <strong>b</strong></p>"
        );
    }
}
