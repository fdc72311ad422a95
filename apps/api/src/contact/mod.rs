pub mod handlers;
pub mod message;
pub mod models;
pub mod relay;
pub mod validation;
