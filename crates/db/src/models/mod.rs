pub mod category;
pub mod log;
pub mod session;
pub mod studio_entry;
