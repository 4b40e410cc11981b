pub mod backend;
pub mod error;
pub mod jwt;
pub mod logger;
