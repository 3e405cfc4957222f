use crossterm::event::KeyCode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use viewer::{PageInput, ViewState};

use crate::app::Action;
use crate::widgets::{hit, render_button};

/// List-mode pagination: Previous, "Page n of N" and Next.
pub struct PaginationFooter {
    input: PageInput,
    prev_area: Option<Rect>,
    input_area: Option<Rect>,
    next_area: Option<Rect>,
}

impl PaginationFooter {
    pub fn new() -> Self {
        Self { input: PageInput::new(1), prev_area: None, input_area: None, next_area: None }
    }

    pub fn is_focused(&self) -> bool {
        self.input.is_focused()
    }

    pub fn focus(&mut self) {
        self.input.focus();
        self.input.clear();
    }

    /// Leave the page field, validating what was typed.
    pub fn commit(&mut self, state: &ViewState) -> Option<Action> {
        let page = self.input.commit(state.page_number(), state.total_pages());
        Some(Action::SetPage(i64::from(page)))
    }

    /// Leave the page field, dropping what was typed.
    pub fn cancel(&mut self, state: &ViewState) {
        self.input.cancel(state.page_number());
    }

    /// Whether a click landed on one of the footer's controls.
    pub fn contains(&self, col: u16, row: u16) -> bool {
        [self.prev_area, self.input_area, self.next_area].into_iter().any(|area| hit(col, row, area))
    }

    pub fn handle_key(&mut self, key: KeyCode, state: &ViewState) -> Option<Action> {
        match key {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Tab => self.commit(state),
            KeyCode::Char(c) => {
                self.input.push(c);
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                None
            }
            _ => None,
        }
    }

    /// Returns `Some` when the click landed on the footer.
    pub fn handle_click(&mut self, col: u16, row: u16, state: &ViewState) -> Option<Option<Action>> {
        if hit(col, row, self.input_area) {
            if !self.is_focused() {
                self.focus();
            }
            return Some(None);
        }

        // Clicking anywhere else blurs the field.
        let blurred = if self.is_focused() { self.commit(state) } else { None };

        if hit(col, row, self.prev_area) {
            return Some(previous(state).or(blurred));
        }
        if hit(col, row, self.next_area) {
            return Some(next(state).or(blurred));
        }
        blurred.map(Some)
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &ViewState) {
        self.input.sync(state.page_number());

        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(14), // previous
                Constraint::Min(0),    // page input
                Constraint::Length(14), // next
            ])
            .split(area);

        self.prev_area = Some(cols[0]);
        render_button(f, cols[0], "◀ Previous", state.has_previous());

        self.next_area = Some(cols[2]);
        render_button(f, cols[2], "Next ▶", state.has_next());

        self.input_area = Some(cols[1]);
        let number = if self.input.is_focused() {
            Span::styled(
                format!("{}▌", self.input.text()),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(
                self.input.text().to_string(),
                Style::default().add_modifier(Modifier::UNDERLINED | Modifier::BOLD),
            )
        };
        let line = Line::from(vec![
            Span::styled("Page ", Style::default().fg(Color::Gray)),
            number,
            Span::styled(format!(" of {}", state.total_pages()), Style::default().fg(Color::Gray)),
        ]);
        let page = Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" g: go to page "));
        f.render_widget(page, cols[1]);
    }
}

/// Action for the Previous button, `None` when disabled.
pub fn previous(state: &ViewState) -> Option<Action> {
    state.has_previous().then(|| Action::SetPage(i64::from(state.page_number()) - 1))
}

/// Action for the Next button, `None` when disabled.
pub fn next(state: &ViewState) -> Option<Action> {
    state.has_next().then(|| Action::SetPage(i64::from(state.page_number()) + 1))
}
