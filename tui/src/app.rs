use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};
use tracing::warn;
use viewer::{Command, ViewState};

use crate::fetcher::FetchOutcome;
use crate::footer::{self, PaginationFooter};
use crate::header::Header;
use crate::views::grid::GridView;
use crate::views::list::ListView;
use crate::views::DataView;
use crate::widgets::render_message;

/// User intents raised by the header, footer and views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    SetFilter(String),
    ToggleView,
    SetPage(i64),
    LoadMore,
}

/// Whether the event loop should keep running.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

/// Rows scrolled by PageUp / PageDown.
const PAGE_JUMP: usize = 10;

/// Top-level application state: owns the view state machine and routes
/// input/rendering to the header, the active data view and the footer.
///
/// Fetches requested by transitions are queued and handed to the event loop
/// through [`App::take_commands`].
pub struct App {
    state: ViewState,
    header: Header,
    list: ListView,
    grid: GridView,
    footer: PaginationFooter,
    pending: Vec<Command>,
}

impl App {
    pub fn new(state: ViewState, scroll_threshold: usize) -> Self {
        let header = Header::new(state.filter());
        Self {
            state,
            header,
            list: ListView::new(),
            grid: GridView::new(scroll_threshold),
            footer: PaginationFooter::new(),
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Queue the initial fetch.
    pub fn start(&mut self) {
        let command = self.state.start();
        self.queue(command);
    }

    /// Drain the fetches requested since the last call.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }

    pub fn on_fetch_outcome(&mut self, outcome: FetchOutcome) {
        let command = match outcome.result {
            Ok(page) => {
                if outcome.seq == self.state.latest_seq() && !self.state.is_grid_view() {
                    self.list.reset();
                }
                self.state.page_loaded(outcome.seq, page)
            }
            Err(e) => {
                warn!(seq = outcome.seq, error = %e, "failed to fetch assets");
                self.state.page_failed(outcome.seq, e.to_string())
            }
        };
        self.queue(command);
    }

    // ------------------------------------------------------------------
    // Input
    // ------------------------------------------------------------------

    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        if self.header.is_focused() {
            let action = self.header.handle_key(key);
            self.perform(action);
            return Control::Continue;
        }

        if self.footer.is_focused() && !self.state.is_grid_view() {
            let action = self.footer.handle_key(key, &self.state);
            self.perform(action);
            return Control::Continue;
        }

        let grid = self.state.is_grid_view();
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
            KeyCode::Char('/') | KeyCode::Char('s') => self.header.focus(),
            KeyCode::Char('v') => self.perform(Some(Action::ToggleView)),
            KeyCode::Char('g') if !grid => self.footer.focus(),
            KeyCode::Left | KeyCode::Char('h') if !grid => {
                let action = footer::previous(&self.state);
                self.perform(action);
            }
            KeyCode::Right | KeyCode::Char('l') if !grid => {
                let action = footer::next(&self.state);
                self.perform(action);
            }
            KeyCode::Down | KeyCode::Char('j') => self.handle_scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.handle_scroll_up(),
            KeyCode::PageDown => {
                for _ in 0..PAGE_JUMP {
                    self.handle_scroll_down();
                }
            }
            KeyCode::PageUp => {
                for _ in 0..PAGE_JUMP {
                    self.handle_scroll_up();
                }
            }
            _ => {}
        }
        Control::Continue
    }

    pub fn handle_click(&mut self, col: u16, row: u16) {
        // Clicks outside the footer blur the page field before anything else reacts.
        if self.footer.is_focused() && !self.footer.contains(col, row) {
            let action = self.footer.commit(&self.state);
            self.perform(action);
        }
        if let Some(action) = self.header.handle_click(col, row) {
            self.perform(action);
            return;
        }
        if !self.state.is_grid_view()
            && let Some(action) = self.footer.handle_click(col, row, &self.state)
        {
            self.perform(action);
        }
    }

    pub fn handle_scroll_down(&mut self) {
        let action = if self.state.is_grid_view() {
            self.grid.handle_scroll_down(&self.state)
        } else {
            self.list.handle_scroll_down(&self.state)
        };
        self.perform(action);
    }

    pub fn handle_scroll_up(&mut self) {
        if self.state.is_grid_view() {
            self.grid.handle_scroll_up();
        } else {
            self.list.handle_scroll_up();
        }
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    pub fn render(&mut self, f: &mut Frame) {
        let grid = self.state.is_grid_view();
        let footer_height = if grid { 0 } else { 3 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // header
                Constraint::Min(0),                // data
                Constraint::Length(1),             // status
                Constraint::Length(footer_height), // pagination
            ])
            .split(f.area());

        self.header.render(f, rows[0], grid);
        self.render_body(f, rows[1]);
        self.render_status(f, rows[2]);
        if !grid {
            self.footer.render(f, rows[3], &self.state);
        }
    }

    fn render_body(&mut self, f: &mut Frame, area: Rect) {
        if self.state.data().is_empty() {
            let text = if self.state.is_loading() { "Loading..." } else { "No results found." };
            render_message(f, area, text);
            return;
        }
        if self.state.is_grid_view() {
            self.grid.render(f, area, &self.state);
        } else {
            self.list.render(f, area, &self.state);
        }
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        if self.state.is_loading() && !self.state.data().is_empty() {
            render_message(f, area, "Loading more data...");
            return;
        }
        let hints = if self.state.is_grid_view() {
            " /: filter  v: list view  j/k: scroll  q: quit"
        } else {
            " /: filter  v: grid view  ←/→: page  g: go to page  j/k: scroll  q: quit"
        };
        f.render_widget(Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)), area);
    }

    // ------------------------------------------------------------------
    // Private helpers
    // ------------------------------------------------------------------

    fn perform(&mut self, action: Option<Action>) {
        let Some(action) = action else { return };
        let command = match action {
            Action::SetFilter(filter) => {
                self.footer.cancel(&self.state);
                self.list.reset();
                self.grid.reset();
                self.state.set_filter(filter)
            }
            Action::ToggleView => {
                self.footer.cancel(&self.state);
                self.list.reset();
                self.grid.reset();
                self.state.toggle_view()
            }
            Action::SetPage(page) => self.state.set_page_number(page),
            Action::LoadMore => self.state.load_more_data(),
        };
        self.queue(command);
    }

    fn queue(&mut self, command: Option<Command>) {
        self.pending.extend(command);
    }
}
