pub mod auth;

pub use auth::{AuthSnapshot, AuthStorage};
