pub mod error;
pub mod health;
pub mod timers;

pub use error::ApiError;
