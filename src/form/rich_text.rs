// src/form/rich_text.rs

/// Minimal capability the form needs from a text editor widget.
pub trait RichTextEditor: Send {
    fn plain_text(&self) -> String;
    fn set_plain_text(&mut self, text: &str);
}

/// String-backed editor behind the multi-line text boxes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlainTextEditor {
    buf: String,
}

impl PlainTextEditor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RichTextEditor for PlainTextEditor {
    fn plain_text(&self) -> String {
        self.buf.clone()
    }

    fn set_plain_text(&mut self, text: &str) {
        self.buf.clear();
        self.buf.push_str(text);
    }
}

/// Non-blank lines of `text`, each trimmed.
pub fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Content threshold for optional summary sections: more than one character
/// after trimming. A lone stray character still counts as empty.
pub fn has_content(text: &str) -> bool {
    text.trim().chars().count() > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_are_trimmed_and_blank_lines_dropped() {
        let text = "  first line \n\n   \n\tsecond\n";
        assert_eq!(non_blank_lines(text), vec!["first line", "second"]);
    }

    #[test]
    fn crlf_lines_are_handled() {
        assert_eq!(non_blank_lines("a\r\n\r\nb\r\n"), vec!["a", "b"]);
    }

    #[test]
    fn content_threshold_is_more_than_one_char() {
        assert!(!has_content(""));
        assert!(!has_content("\n"));
        assert!(!has_content("  x \n"));
        assert!(has_content("xy"));
        assert!(has_content(" x y "));
    }

    #[test]
    fn set_plain_text_replaces_buffer() {
        let mut ed = PlainTextEditor::new();
        ed.set_plain_text("old");
        ed.set_plain_text("new");
        assert_eq!(ed.plain_text(), "new");
    }
}
