pub mod auth_dto;
pub mod contact_dto;
pub mod quote_dto;
