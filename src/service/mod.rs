pub mod auth_service;
pub mod contact_service;
pub mod quote_service;
pub mod session_observer;
pub mod session_store;
