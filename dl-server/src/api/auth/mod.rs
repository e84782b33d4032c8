pub mod auth;
pub mod login_request;
pub mod password;
pub mod register_request;
pub mod token_response;
pub mod user_dto;
pub mod user_response;
