pub mod catalog;
pub mod notification;
pub mod profile;
pub mod quote_request;
pub mod session;
