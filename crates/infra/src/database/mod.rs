//! Database implementations

pub mod holiday_repository;
pub mod manager;
pub mod policy_repository;

pub use holiday_repository::SqliteHolidayRepository;
pub use manager::DbManager;
pub use policy_repository::SqlitePolicyRepository;
