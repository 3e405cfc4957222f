mod error;
mod fetch;

pub use error::{ClientError, Result};
pub use fetch::{AssetClient, decode_page};
pub use reqwest::StatusCode;
