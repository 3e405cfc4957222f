mod asset;
mod page;

pub use asset::{Asset, Ip, Port};
pub use page::{PageQuery, PageResponse};
