mod config;
mod fatal;
mod logging;

pub use config::load_config;
pub use fatal::install_fatal_handler;
pub use logging::init_logging;
