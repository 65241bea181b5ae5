mod load;
mod types;

pub use load::load;
pub use types::{Config, GuruConfig, ShareConfig, ToolsConfig};
