//! PostgreSQL Repository Implementations

mod character_repository;
mod contact_manager;
mod organization_repository;

pub use character_repository::PgCharacterRepository;
pub use contact_manager::PgContactManager;
pub use organization_repository::PgOrganizationRepository;
