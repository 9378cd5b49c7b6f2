pub mod patterns;
pub mod resolve;
pub mod types;
