mod defaults;
mod model;

pub use defaults::{DEFAULT_GLOBAL_SHORTCUT, DEFAULT_LOCALE};
pub use model::Settings;
