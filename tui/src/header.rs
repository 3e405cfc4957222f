use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Action;
use crate::widgets::{hit, render_button, TextInput};

/// Top bar: product name, hostname filter and the list/grid toggle.
pub struct Header {
    filter: TextInput,
    toggle_area: Option<Rect>,
}

impl Header {
    pub fn new(initial_filter: &str) -> Self {
        Self { filter: TextInput::new(initial_filter), toggle_area: None }
    }

    pub fn is_focused(&self) -> bool {
        self.filter.focused
    }

    pub fn focus(&mut self) {
        self.filter.focused = true;
    }

    pub fn blur(&mut self) {
        self.filter.focused = false;
    }

    /// Keys typed while the filter has focus. Every edit re-filters.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Action> {
        match key {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                self.blur();
                None
            }
            KeyCode::Char(c) => {
                self.filter.input.push(c);
                Some(Action::SetFilter(self.filter.input.clone()))
            }
            KeyCode::Backspace => {
                self.filter.input.pop().map(|_| Action::SetFilter(self.filter.input.clone()))
            }
            _ => None,
        }
    }

    /// Returns `Some` when the click landed on the header.
    pub fn handle_click(&mut self, col: u16, row: u16) -> Option<Option<Action>> {
        if hit(col, row, self.toggle_area) {
            self.blur();
            return Some(Some(Action::ToggleView));
        }
        if hit(col, row, self.filter.area) {
            self.focus();
            return Some(None);
        }
        self.blur();
        None
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, grid: bool) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(13), // name
                Constraint::Min(10),   // filter
                Constraint::Length(12), // toggle
            ])
            .split(area);

        let name = Paragraph::new(" assetview")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(name, cols[0]);

        let title = if self.filter.focused { " Filter (typing...) " } else { " Filter (/ or click) " };
        self.filter.render(f, cols[1], title, "Filter by hostname...");

        self.toggle_area = Some(cols[2]);
        let label = if grid { "▦ Grid (v)" } else { "☰ List (v)" };
        render_button(f, cols[2], label, true);
    }
}
