use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use viewer::{sorted_by_host, ViewState};

use models::Asset;

use super::DataView;

/// Height of one card: five field lines plus the border.
const CARD_HEIGHT: u16 = 7;

/// One page of assets as stacked cards, ordered by host.
#[derive(Default)]
pub struct ListView {
    offset: usize,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    fn card(asset: &Asset) -> Paragraph<'_> {
        let label = |name: &'static str| Span::styled(name, Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD));
        let lines = vec![
            Line::from(vec![label("ID:       "), Span::raw(asset.id.to_string())]),
            Line::from(vec![label("Comment:  "), Span::raw(asset.comment.as_str())]),
            Line::from(vec![label("Owner:    "), Span::raw(asset.owner.as_str())]),
            Line::from(vec![label("IPs:      "), Span::raw(asset.ip_list())]),
            Line::from(vec![label("Ports:    "), Span::raw(asset.port_list())]),
        ];
        let title = Span::styled(
            format!(" Host: {} ", asset.host),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        );
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title))
    }
}

impl DataView for ListView {
    fn render(&mut self, f: &mut Frame, area: Rect, state: &ViewState) {
        let sorted = sorted_by_host(state.data());
        self.offset = self.offset.min(sorted.len().saturating_sub(1));

        let mut y = area.y;
        for asset in sorted.iter().skip(self.offset) {
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            let card_area = Rect { x: area.x, y, width: area.width, height: CARD_HEIGHT };
            f.render_widget(Self::card(asset), card_area);
            y += CARD_HEIGHT;
        }
    }

    fn handle_scroll_down(&mut self, state: &ViewState) -> Option<crate::app::Action> {
        if self.offset + 1 < state.data().len() {
            self.offset += 1;
        }
        None
    }

    fn handle_scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    fn reset(&mut self) {
        self.offset = 0;
    }
}
