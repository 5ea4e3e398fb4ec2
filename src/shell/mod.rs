mod error;
mod menu;

pub use error::ShellError;
pub use menu::{MenuChoice, Shell};
