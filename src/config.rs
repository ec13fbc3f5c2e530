pub mod operations;
pub mod types;

// Re-export types
pub use types::StoreConfig;

// Re-export operations
pub use operations::{load_cfg, load_default_cfg, save_cfg};
