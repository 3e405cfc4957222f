pub mod grid;
pub mod list;

use ratatui::{layout::Rect, Frame};
use viewer::ViewState;

use crate::app::Action;

/// Common interface for the two ways of showing assets.
pub trait DataView {
    /// Render the non-empty data set into the given area.
    fn render(&mut self, f: &mut Frame, area: Rect, state: &ViewState);

    /// Scroll one row towards the end. May ask for more data.
    fn handle_scroll_down(&mut self, _state: &ViewState) -> Option<Action> { None }

    /// Scroll one row towards the start.
    fn handle_scroll_up(&mut self) {}

    /// Jump back to the top, e.g. after the data set was replaced.
    fn reset(&mut self) {}
}
