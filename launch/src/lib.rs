pub mod config;
pub mod logger;
pub mod read;
pub mod timer;

pub use heimdall;

pub use read::read;
