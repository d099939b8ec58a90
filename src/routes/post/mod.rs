pub mod create;
pub mod get;
pub mod image;
pub mod list;
