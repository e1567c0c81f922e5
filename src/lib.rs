pub mod cli;
pub mod config;
pub mod icon;
pub mod logging;
pub mod writer;

#[cfg(test)]
mod test_util;

pub use cli::{run, Cli};
pub use config::GenConfig;
pub use icon::{build_icon, IconImage, ICON_FILE_LEN};
pub use writer::{generate, write_icon};
