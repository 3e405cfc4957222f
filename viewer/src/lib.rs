//! Pagination and view-mode state machine for the asset viewer.
//!
//! All transitions are synchronous and return the fetch they want issued as a
//! [`Command`]; performing the I/O and feeding the outcome back as an
//! [`Event`] is the caller's job.

mod order;
mod page_input;
mod scroll;
mod state;

pub use order::{merge_by_id, sorted_by_host};
pub use page_input::{PageInput, clamp_page, parse_page};
pub use scroll::near_bottom;
pub use state::{Command, Event, FetchRequest, ViewState};
