pub mod commands;
pub mod di;
pub mod entity;
pub mod router;
pub mod solana;
pub mod utils;

// Re-export commonly used items
pub use commands::*;
pub use di::*;
pub use entity::*;
pub use router::*;
pub use solana::*;
pub use utils::*;

/// Crate version reported at startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
