use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Free-text editor for the daily reflection prompt.
///
/// Features:
/// - Insert, backspace, delete and newlines
/// - Cursor movement (left/right/home/end), counted in chars not bytes
/// - Soft-wrapped rendering with a block cursor when focused
#[derive(Debug, Clone, Default)]
pub struct ReflectionBox {
    content: String,
    /// Cursor position as a char index into `content`.
    cursor: usize,
}

impl ReflectionBox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_idx = self.byte_index(self.cursor);
        self.content.insert(byte_idx, c);
        self.cursor += 1;
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Insert a pasted string at the cursor.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| *c != '\r') {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor (like Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let byte_idx = self.byte_index(self.cursor);
            self.content.remove(byte_idx);
        }
    }

    /// Delete the character at the cursor (like Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor < self.char_count() {
            let byte_idx = self.byte_index(self.cursor);
            self.content.remove(byte_idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Render inside a bordered block. The placeholder shows when empty.
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        placeholder: &str,
        focused: bool,
    ) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);

        let lines = if self.is_empty() && !focused {
            vec![Line::from(Span::styled(
                placeholder.to_string(),
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.styled_lines(focused)
        };

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }

    fn styled_lines(&self, focused: bool) -> Vec<Line<'static>> {
        let text_style = Style::default().fg(Color::White);
        let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

        let mut lines = Vec::new();
        let mut spans: Vec<Span<'static>> = Vec::new();
        let mut run = String::new();

        for (idx, c) in self.content.chars().enumerate() {
            let at_cursor = focused && idx == self.cursor;
            if c == '\n' {
                if !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), text_style));
                }
                if at_cursor {
                    spans.push(Span::styled(" ", cursor_style));
                }
                lines.push(Line::from(std::mem::take(&mut spans)));
                continue;
            }
            if at_cursor {
                if !run.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut run), text_style));
                }
                spans.push(Span::styled(c.to_string(), cursor_style));
            } else {
                run.push(c);
            }
        }

        if !run.is_empty() {
            spans.push(Span::styled(run, text_style));
        }
        if focused && self.cursor >= self.char_count() {
            spans.push(Span::styled(" ", cursor_style));
        }
        lines.push(Line::from(spans));
        lines
    }
}
