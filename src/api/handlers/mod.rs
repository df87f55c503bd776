//! HTTP request handlers for API endpoints.

pub mod health;
pub mod lookup;
pub mod shorten;

pub use health::health_handler;
pub use lookup::lookup_handler;
pub use shorten::shorten_handler;
