use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::state::{EmojiPicker, PickOutcome};
use crate::dismiss::point_in_rect;

impl EmojiPicker {
    /// Route one terminal event into the panel.
    ///
    /// Printable keys and Backspace edit the query; a pointer press on a
    /// drawn emoji cell picks that emoji, records it to the recency list,
    /// and returns it. Everything else is left to the host, including
    /// dismissal.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> Option<PickOutcome> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(*key, now);
                None
            }
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Chorded keys belong to the host's keymap, not the query.
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return;
        }
        match key.code {
            KeyCode::Char(ch) => {
                let mut input = self.filter.input().to_string();
                input.push(ch);
                self.filter.set_input(input, now);
            }
            KeyCode::Backspace => {
                let mut input = self.filter.input().to_string();
                if input.pop().is_some() {
                    self.filter.set_input(input, now);
                }
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<PickOutcome> {
        if !matches!(mouse.kind, MouseEventKind::Down(_)) {
            return None;
        }
        let emoji = self.cells.iter().find_map(|cell| {
            point_in_rect(mouse.column, mouse.row, cell.area).then(|| cell.emoji.clone())
        })?;
        Some(self.pick(emoji))
    }
}
