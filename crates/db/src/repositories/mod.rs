pub mod category_repo;
pub mod log_repo;
pub mod session_repo;
pub mod studio_entry_repo;

pub use category_repo::CategoryRepo;
pub use log_repo::LogRepo;
pub use session_repo::SessionRepo;
pub use studio_entry_repo::StudioEntryRepo;
