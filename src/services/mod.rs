pub mod health;
pub mod loader;
