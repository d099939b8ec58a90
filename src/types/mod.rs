pub mod error;
pub mod member;
pub mod post;
pub mod response;
pub mod token;
pub mod user;
pub mod validate;
