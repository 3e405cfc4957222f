use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

// ---------------------------------------------------------------------------
// Hit-testing
// ---------------------------------------------------------------------------

/// Return `true` when (`col`, `row`) falls inside `area`.
pub fn in_area(col: u16, row: u16, area: Rect) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// Same as [`in_area`] for an area that may not have been rendered yet.
pub fn hit(col: u16, row: u16, area: Option<Rect>) -> bool {
    area.is_some_and(|a| in_area(col, row, a))
}

// ---------------------------------------------------------------------------
// Text input
// ---------------------------------------------------------------------------

/// Single-line text field with focus state.
#[derive(Default)]
pub struct TextInput {
    pub input: String,
    pub focused: bool,
    pub area: Option<Rect>,
}

impl TextInput {
    pub fn new(initial: impl Into<String>) -> Self {
        Self { input: initial.into(), ..Self::default() }
    }

    /// Render the field into `area`, saving the area for later hit-testing.
    ///
    /// `placeholder` is shown dimmed when the field is empty and unfocused.
    pub fn render(&mut self, f: &mut Frame, area: Rect, title: &str, placeholder: &str) {
        self.area = Some(area);

        let border_style = if self.focused {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::White)
        };

        let text = if self.focused {
            Span::styled(format!("{}▌", self.input), Style::default().fg(Color::Blue))
        } else if self.input.is_empty() {
            Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(self.input.clone(), Style::default().fg(Color::Blue))
        };

        let widget = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).border_style(border_style).title(title.to_string()));
        f.render_widget(widget, area);
    }
}

// ---------------------------------------------------------------------------
// Buttons and messages
// ---------------------------------------------------------------------------

/// Render a bordered button; disabled buttons are dimmed.
pub fn render_button(f: &mut Frame, area: Rect, label: &str, enabled: bool) {
    let style = if enabled {
        Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(label.to_string())
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));
    f.render_widget(button, area);
}

/// A grey, centred one-line message (placeholders, loading notices).
pub fn render_message(f: &mut Frame, area: Rect, text: &str) {
    let msg = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center);
    f.render_widget(msg, area);
}
