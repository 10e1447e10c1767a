pub mod config;
pub mod loader;
pub mod logger;
pub mod session;

pub use config::SessionConfig;
pub use loader::{load_program, parse_address, parse_hex, read_program};
pub use session::{Report, Session, StopReason};

pub type AppResult<T> = anyhow::Result<T>;
