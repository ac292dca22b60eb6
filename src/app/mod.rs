pub mod comment_service;
pub mod recipe_service;
