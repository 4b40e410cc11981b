pub mod auth_handler;
pub mod contact_handler;
pub mod quote_handler;
pub mod session_handler;
pub mod site_handler;
