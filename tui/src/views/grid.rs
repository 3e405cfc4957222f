use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};
use viewer::{near_bottom, ViewState};

use models::Asset;

use super::DataView;
use crate::app::Action;

/// Every fetched asset in one scrolling table. Reaching the end of the
/// table asks for the next page.
pub struct GridView {
    table_state: TableState,
    /// Rows of the table body visible during the last render.
    viewport_rows: usize,
    /// How close to the end (in rows) scrolling must get to load more.
    threshold: usize,
}

impl GridView {
    pub fn new(threshold: usize) -> Self {
        Self { table_state: TableState::default(), viewport_rows: 0, threshold }
    }

    /// IPs and ports are stacked one per line.
    fn row_height(asset: &Asset) -> usize {
        asset.ips.len().max(asset.ports.len()).max(1)
    }

    fn row(asset: &Asset) -> Row<'_> {
        let ips: Text = asset.ips.iter().map(|ip| Line::from(ip.address.as_str())).collect();
        let ports: Text = asset.ports.iter().map(|p| Line::from(p.port.to_string())).collect();
        Row::new(vec![
            Cell::from(asset.host.as_str()),
            Cell::from(asset.id.to_string()),
            Cell::from(asset.comment.as_str()),
            Cell::from(asset.owner.as_str()),
            Cell::from(ips),
            Cell::from(ports),
        ])
        .height(Self::row_height(asset) as u16)
    }

    /// Whether the visible window sits within `threshold` rows of the end.
    fn is_near_end(&self, data: &[Asset]) -> bool {
        if data.is_empty() {
            return false;
        }
        let heights: Vec<usize> = data.iter().map(Self::row_height).collect();
        let total: usize = heights.iter().sum();
        let selected = self.table_state.selected().unwrap_or(0).min(data.len() - 1);
        let offset = self.table_state.offset().min(data.len());

        // The table scrolls so that the selected row stays visible.
        let through_selected: usize = heights[..=selected].iter().sum();
        let above_offset: usize = heights[..offset].iter().sum();
        let scroll_top = above_offset.max(through_selected.saturating_sub(self.viewport_rows));

        near_bottom(scroll_top, self.viewport_rows, total, self.threshold)
    }
}

impl DataView for GridView {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &ViewState) {
        let data = state.data();
        if self.table_state.selected().is_none() && !data.is_empty() {
            self.table_state.select(Some(0));
        }

        // Borders and the header row.
        self.viewport_rows = area.height.saturating_sub(3) as usize;

        let header = Row::new(vec!["Host", "ID", "Comment", "Owner", "IPs", "Ports"])
            .style(Style::default().fg(Color::Gray).bg(Color::DarkGray).add_modifier(Modifier::BOLD));
        let widths = [
            Constraint::Ratio(3, 12),
            Constraint::Ratio(1, 12),
            Constraint::Ratio(3, 12),
            Constraint::Ratio(2, 12),
            Constraint::Ratio(2, 12),
            Constraint::Ratio(1, 12),
        ];
        let title = format!(" Assets ({}) ", data.len());
        let table = Table::new(data.iter().map(Self::row), widths)
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White).add_modifier(Modifier::BOLD));

        f.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn handle_scroll_down(&mut self, state: &ViewState) -> Option<Action> {
        let data = state.data();
        if data.is_empty() {
            return None;
        }
        let next = self.table_state.selected().map_or(0, |i| (i + 1).min(data.len() - 1));
        self.table_state.select(Some(next));

        self.is_near_end(data).then_some(Action::LoadMore)
    }

    fn handle_scroll_up(&mut self) {
        let prev = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(prev));
    }

    fn reset(&mut self) {
        self.table_state = TableState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::PageResponse;
    use viewer::Command;

    fn loaded_grid(count: i64, total_pages: i64) -> ViewState {
        let mut state = ViewState::new("", 10, true);
        let Some(Command::Fetch(req)) = state.start() else { panic!("expected fetch") };
        let assets = (0..count).map(|id| Asset::new(id, format!("h{id}"))).collect();
        state.page_loaded(req.seq, PageResponse { assets, total_pages, ..Default::default() });
        state
    }

    #[test]
    fn test_short_table_is_near_end() {
        let state = loaded_grid(10, 3);
        let mut grid = GridView::new(5);
        grid.viewport_rows = 23;
        assert_eq!(grid.handle_scroll_down(&state), Some(Action::LoadMore));
    }

    #[test]
    fn test_long_table_needs_scrolling() {
        let state = loaded_grid(50, 3);
        let mut grid = GridView::new(5);
        grid.viewport_rows = 20;

        // selecting rows 0..=23 stays clear of the threshold
        for _ in 0..24 {
            assert_eq!(grid.handle_scroll_down(&state), None);
        }
        // the 45th step pushes the window bottom to row 45 of 50
        let mut triggered_at = None;
        for step in 25..=50 {
            if grid.handle_scroll_down(&state).is_some() {
                triggered_at = Some(step);
                break;
            }
        }
        assert_eq!(triggered_at, Some(45));
    }

    #[test]
    fn test_tall_rows_count_lines() {
        let mut state = ViewState::new("", 10, true);
        let Some(Command::Fetch(req)) = state.start() else { panic!("expected fetch") };
        let assets = (0..10)
            .map(|id| Asset::new(id, "h").with_ip("10.0.0.1").with_ip("10.0.0.2").with_ip("10.0.0.3"))
            .collect();
        state.page_loaded(req.seq, PageResponse { assets, total_pages: 2, ..Default::default() });

        // 30 lines of content in a 20-line window
        let mut grid = GridView::new(5);
        grid.viewport_rows = 20;
        assert_eq!(grid.handle_scroll_down(&state), None);
    }
}
