pub mod image;
pub mod member;
pub mod post;
pub mod service;
pub mod user;
