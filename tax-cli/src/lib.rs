pub mod app;
pub mod cli;
pub mod form;
pub mod logging;
pub mod utils;

pub use app::App;
pub use cli::{Cli, Command};
