use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{CellHit, EmojiPicker};

/// Columns left blank between neighboring emoji cells.
const CELL_GAP: u16 = 1;

impl EmojiPicker {
    /// Draw the panel into `area` and record it (plus every emoji cell)
    /// for pointer hit-testing and dismissal bindings.
    pub fn draw(&mut self, frame: &mut Frame, area: Rect) {
        self.area = Some(area);
        self.cells.clear();

        frame.render_widget(Clear, area);
        let block = Block::bordered()
            .title(self.labels.title.as_str())
            .border_style(self.theme.border_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);
        self.render_query_line(frame, layout[0]);
        self.render_body(frame, layout[1]);
    }

    fn render_query_line(&self, frame: &mut Frame, area: Rect) {
        let prompt = Span::styled("> ", self.theme.prompt_style());
        let line = if self.filter.input().is_empty() {
            Line::from(vec![
                prompt,
                Span::styled(self.labels.placeholder.as_str(), self.theme.empty_style()),
            ])
        } else {
            Line::from(vec![prompt, Span::raw(self.filter.input())])
        };
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        if self.filter.committed().is_empty() {
            self.render_recents(frame, area);
        } else if self.filter.match_count() == 0 {
            self.render_empty_message(frame, area);
        } else {
            let values: Vec<String> = self
                .filter
                .match_entries()
                .map(|(_, emoji)| emoji.to_string())
                .collect();
            self.render_grid(frame, area, &values);
        }
    }

    fn render_recents(&mut self, frame: &mut Frame, area: Rect) {
        if self.recent.is_empty() {
            return;
        }
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);
        let heading = Paragraph::new(self.labels.recent_heading.as_str())
            .style(self.theme.header_style());
        frame.render_widget(heading, layout[0]);

        let values = self.recent.entries().to_vec();
        self.render_grid(frame, layout[1], &values);
    }

    fn render_empty_message(&self, frame: &mut Frame, area: Rect) {
        let message = Paragraph::new(self.labels.empty.as_str())
            .alignment(Alignment::Center)
            .style(self.theme.empty_style());
        let mut line_area = area;
        line_area.y += area.height / 2;
        line_area.height = 1;
        frame.render_widget(message, line_area);
    }

    /// Flow cells left to right, wrapping rows, until the area runs out.
    fn render_grid(&mut self, frame: &mut Frame, area: Rect, values: &[String]) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let right = area.x.saturating_add(area.width);
        let bottom = area.y.saturating_add(area.height);
        let mut column = area.x;
        let mut row = area.y;

        for emoji in values {
            // Clamped to at most 8 columns, so the cast is lossless.
            let width = UnicodeWidthStr::width(emoji.as_str()).clamp(1, 8) as u16;
            if column.saturating_add(width) > right {
                if column == area.x {
                    // Not even one cell fits on a row.
                    break;
                }
                column = area.x;
                row += 1;
            }
            if row >= bottom || column.saturating_add(width) > right {
                break;
            }

            let cell = Rect::new(column, row, width, 1);
            frame.render_widget(Paragraph::new(emoji.as_str()), cell);
            self.cells.push(CellHit {
                area: cell,
                emoji: emoji.clone(),
            });
            column = column.saturating_add(width).saturating_add(CELL_GAP);
        }
    }
}
