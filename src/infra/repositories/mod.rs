pub mod sqlite_venue_repo;
pub mod sqlite_professional_repo;
pub mod sqlite_service_repo;
pub mod sqlite_appointment_repo;
pub mod sqlite_block_repo;
pub mod sqlite_customer_repo;
