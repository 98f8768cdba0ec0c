/// Represents an open document in the LSP server
pub struct Document {
    /// The current text content of the document
    text: String,
    /// Lines of the document (cached for position calculations)
    lines: Vec<String>,
}

impl Document {
    pub fn new(text: String) -> Self {
        let lines = text.lines().map(|s| s.to_string()).collect();
        Self { text, lines }
    }

    pub fn update_text(&mut self, new_text: String) {
        self.lines = new_text.lines().map(|s| s.to_string()).collect();
        self.text = new_text;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get byte offset from position
    pub fn offset_from_position(&self, line: u32, character: u32) -> usize {
        let mut offset = 0;
        for (idx, l) in self.lines.iter().enumerate() {
            if idx == line as usize {
                offset += character as usize;
                break;
            }
            offset += l.len() + 1; // +1 for newline
        }
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_on_first_line() {
        let doc = Document::new("<?lx foo() ?>".to_string());
        assert_eq!(doc.offset_from_position(0, 9), 9);
    }

    #[test]
    fn test_offset_across_lines() {
        let doc = Document::new("<html>\n<?lx\nprint(1);\n?>\n</html>".to_string());
        assert_eq!(doc.offset_from_position(0, 0), 0);
        assert_eq!(doc.offset_from_position(1, 0), 7);
        assert_eq!(doc.offset_from_position(2, 3), 15);
        assert_eq!(doc.offset_from_position(4, 2), 27);
    }

    #[test]
    fn test_update_text_replaces_content() {
        let mut doc = Document::new("old".to_string());
        doc.update_text("line one\nline two".to_string());
        assert_eq!(doc.text(), "line one\nline two");
        assert_eq!(doc.offset_from_position(1, 4), 13);
    }
}
