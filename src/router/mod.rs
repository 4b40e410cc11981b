pub mod auth_router;
pub mod quote_router;
pub mod site_router;
