pub mod config;
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use config::Settings;
pub use handlers::{
    handle_add, handle_check, handle_init, handle_list, handle_show, open_database,
};
