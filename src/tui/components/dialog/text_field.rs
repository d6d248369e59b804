//! Single-line text entry used by the item dialogs.
//!
//! `cursor` is a byte offset into `buffer`, always on a char boundary.
//! Item titles are one line, so pasted newlines become spaces.

use unicode_width::UnicodeWidthStr;

use crate::tui::event::TuiEvent;

pub struct TextField {
    pub buffer: String,
    cursor: usize,
}

impl TextField {
    pub fn new(initial: &str) -> Self {
        let buffer = single_line(initial);
        Self {
            cursor: buffer.len(),
            buffer,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply an editing event. Returns `true` if the event was consumed.
    pub fn handle_event(&mut self, event: &TuiEvent) -> bool {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
            }
            TuiEvent::Paste(text) => {
                let text = single_line(text);
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
            }
            TuiEvent::Backspace => {
                if self.cursor > 0 {
                    let prev = prev_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(prev..self.cursor);
                    self.cursor = prev;
                }
            }
            TuiEvent::Delete => {
                if self.cursor < self.buffer.len() {
                    let next = next_char_boundary(&self.buffer, self.cursor);
                    self.buffer.drain(self.cursor..next);
                }
            }
            TuiEvent::Left => {
                if self.cursor > 0 {
                    self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                }
            }
            TuiEvent::Right => {
                if self.cursor < self.buffer.len() {
                    self.cursor = next_char_boundary(&self.buffer, self.cursor);
                }
            }
            TuiEvent::Home => self.cursor = 0,
            TuiEvent::End => self.cursor = self.buffer.len(),
            _ => return false,
        }
        true
    }

    /// The slice of the buffer to show in `width` columns, and the cursor's
    /// column within it. Scrolls so the cursor stays visible.
    pub fn visible(&self, width: usize) -> (&str, u16) {
        if width == 0 {
            return ("", 0);
        }
        let mut start = 0;
        // Drop leading chars until the text before the cursor fits (leave a column for the cursor).
        while self.buffer[start..self.cursor].width() >= width {
            start = next_char_boundary(&self.buffer, start);
        }
        let cursor_col = self.buffer[start..self.cursor].width() as u16;

        let mut end = start;
        while end < self.buffer.len() {
            let next = next_char_boundary(&self.buffer, end);
            if self.buffer[start..next].width() > width {
                break;
            }
            end = next;
        }
        (&self.buffer[start..end], cursor_col)
    }
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
