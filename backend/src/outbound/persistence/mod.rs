//! Persistence adapters for the guest server domain.
//!
//! The stores keep whole snapshots in process memory behind a lock. They
//! round-trip the data model exactly, which is all the persistence port
//! promises; a database-backed adapter would slot in behind the same
//! traits.

pub mod memory_guest_server_repository;
pub mod memory_guest_server_setting_repository;

pub use memory_guest_server_repository::MemoryGuestServerRepository;
pub use memory_guest_server_setting_repository::MemoryGuestServerSettingRepository;
