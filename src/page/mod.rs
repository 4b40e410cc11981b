pub mod auth_page;
pub mod quote_page;
pub mod site;
