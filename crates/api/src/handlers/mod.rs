pub mod auth;
pub mod categories;
pub mod logs;
pub mod pages;
pub mod studio;
pub mod token;
