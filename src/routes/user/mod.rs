pub mod get;
pub mod login;
pub mod register;
