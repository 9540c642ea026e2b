pub mod cache;
pub mod error;
pub mod health;
pub mod movies;

pub use error::AppError;
