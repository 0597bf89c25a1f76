pub mod config;
pub mod export;
pub mod snapshot;
pub mod summary;

pub use config::*;
pub use export::*;
pub use snapshot::*;
pub use summary::*;
