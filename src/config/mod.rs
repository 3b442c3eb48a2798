mod types;
mod loader;
mod provider;
mod validation;
pub mod defaults;

pub use types::*;
pub use loader::{find_default_config_file, load_config};
pub use provider::ConfigProvider;
pub use validation::check_config;
