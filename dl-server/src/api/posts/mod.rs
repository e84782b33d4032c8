pub mod add_comment_request;
pub mod comment_dto;
pub mod comment_list_response;
pub mod create_post_request;
pub mod like_list_response;
pub mod post_dto;
pub mod post_list_response;
pub mod post_response;
pub mod posts;
