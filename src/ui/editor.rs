use std::cmp::min;

/// Multi-line input editor for the prose being enhanced.
///
/// Lines are stored in logical order; the cursor is tracked as a
/// (row, column) pair where the column counts characters, not bytes, so
/// Arabic text edits stay on character boundaries.
pub struct Editor {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    scroll_top: usize,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
            scroll_top: 0,
        }
    }

    /// Seed the editor with existing text (e.g. from `--file`) and place the
    /// cursor at the end.
    pub fn from_content(content: &str) -> Self {
        let mut lines: Vec<String> = content.lines().map(|line| line.to_string()).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        let mut editor = Self {
            lines,
            cursor_row: 0,
            cursor_col: 0,
            scroll_top: 0,
        };
        editor.move_to_end();
        editor
    }

    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True when there is nothing but whitespace to submit.
    pub fn is_blank(&self) -> bool {
        self.lines.iter().all(|line| line.trim().is_empty())
    }

    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor_row = 0;
        self.cursor_col = 0;
        self.scroll_top = 0;
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn ensure_cursor_visible(&mut self, view_height: usize) {
        if view_height == 0 {
            self.scroll_top = 0;
            return;
        }
        if self.cursor_row < self.scroll_top {
            self.scroll_top = self.cursor_row;
        } else {
            let bottom = self.scroll_top + view_height - 1;
            if self.cursor_row > bottom {
                self.scroll_top = self.cursor_row + 1 - view_height;
            }
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        let column = self.cursor_col;
        let line = self.current_line_mut();
        let idx = Self::char_to_byte_index(line, column);
        line.insert(idx, ch);
        self.cursor_col += 1;
    }

    pub fn insert_newline(&mut self) {
        let column = self.cursor_col;
        let line = self.current_line_mut();
        let idx = Self::char_to_byte_index(line, column);
        let remainder = line.split_off(idx);
        self.lines.insert(self.cursor_row + 1, remainder);
        self.cursor_row += 1;
        self.cursor_col = 0;
    }

    pub fn backspace(&mut self) {
        if self.cursor_col > 0 {
            let column = self.cursor_col;
            let line = self.current_line_mut();
            let end = Self::char_to_byte_index(line, column);
            let start = Self::char_to_byte_index(line, column - 1);
            line.drain(start..end);
            self.cursor_col -= 1;
            return;
        }

        if self.cursor_row == 0 {
            return;
        }

        // Join this line onto the previous one.
        let current_line = self.lines.remove(self.cursor_row);
        self.cursor_row -= 1;
        self.cursor_col = self.line_len(self.cursor_row);
        let prev_line = self.current_line_mut();
        prev_line.push_str(&current_line);
    }

    pub fn delete(&mut self) {
        let line_len = self.line_len(self.cursor_row);
        if self.cursor_col < line_len {
            let column = self.cursor_col;
            let line = self.current_line_mut();
            let start = Self::char_to_byte_index(line, column);
            let end = Self::char_to_byte_index(line, column + 1);
            line.drain(start..end);
            return;
        }

        if self.cursor_row + 1 < self.lines.len() {
            let next_line = self.lines.remove(self.cursor_row + 1);
            let line = self.current_line_mut();
            line.push_str(&next_line);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = self.line_len(self.cursor_row);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor_col < self.line_len(self.cursor_row) {
            self.cursor_col += 1;
        } else if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
            self.cursor_col = min(self.cursor_col, self.line_len(self.cursor_row));
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_row + 1 < self.lines.len() {
            self.cursor_row += 1;
            self.cursor_col = min(self.cursor_col, self.line_len(self.cursor_row));
        }
    }

    pub fn move_to_end(&mut self) {
        self.cursor_row = self.lines.len() - 1;
        self.cursor_col = self.line_len(self.cursor_row);
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn current_line_mut(&mut self) -> &mut String {
        &mut self.lines[self.cursor_row]
    }

    fn char_to_byte_index(line: &str, char_idx: usize) -> usize {
        line.char_indices()
            .nth(char_idx)
            .map(|(idx, _)| idx)
            .unwrap_or(line.len())
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_content_roundtrip() {
        let mut editor = Editor::new();
        for ch in "نص".chars() {
            editor.insert_char(ch);
        }
        editor.insert_newline();
        editor.insert_char('م');
        assert_eq!(editor.content(), "نص\nم");
    }

    #[test]
    fn backspace_handles_multibyte_characters() {
        let mut editor = Editor::from_content("سلام");
        editor.backspace();
        assert_eq!(editor.content(), "سلا");
        assert_eq!(editor.cursor(), (0, 3));
    }

    #[test]
    fn backspace_at_line_start_joins_lines() {
        let mut editor = Editor::from_content("أهلا\nوسهلا");
        editor.cursor_row = 1;
        editor.cursor_col = 0;
        editor.backspace();
        assert_eq!(editor.content(), "أهلاوسهلا");
        assert_eq!(editor.cursor(), (0, 4));
    }

    #[test]
    fn delete_at_line_end_joins_the_next_line() {
        let mut editor = Editor::from_content("أب\nج");
        editor.cursor_row = 0;
        editor.cursor_col = 2;
        editor.delete();
        assert_eq!(editor.content(), "أبج");
    }

    #[test]
    fn newline_splits_at_the_cursor() {
        let mut editor = Editor::from_content("أبجد");
        editor.cursor_col = 2;
        editor.insert_newline();
        assert_eq!(editor.content(), "أب\nجد");
        assert_eq!(editor.cursor(), (1, 0));
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        assert!(Editor::new().is_blank());
        assert!(Editor::from_content("  \n\t ").is_blank());
        assert!(!Editor::from_content("نص").is_blank());
    }

    #[test]
    fn from_content_places_cursor_at_the_end() {
        let editor = Editor::from_content("أول\nثانٍ");
        assert_eq!(editor.cursor(), (1, 4));
    }

    #[test]
    fn vertical_moves_clamp_the_column() {
        let mut editor = Editor::from_content("قصير\nسطر أطول");
        editor.move_to_end();
        editor.move_up();
        assert_eq!(editor.cursor(), (0, 4));
    }

    #[test]
    fn scrolling_follows_the_cursor() {
        let mut editor = Editor::from_content("أ\nب\nج\nد\nه");
        editor.move_to_end();
        editor.ensure_cursor_visible(2);
        assert_eq!(editor.scroll_top(), 3);
        editor.cursor_row = 0;
        editor.ensure_cursor_visible(2);
        assert_eq!(editor.scroll_top(), 0);
    }
}
