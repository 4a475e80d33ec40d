pub mod config;
pub mod household;
pub mod migrate;
pub mod observability;

pub use config::Config;
pub use household::Household;
