//! Business logic services for the application layer.

pub mod ability_service;
pub mod evolution_service;
pub mod page_service;
pub mod type_service;

pub use ability_service::AbilityService;
pub use evolution_service::EvolutionService;
pub use page_service::PageService;
pub use type_service::TypeService;
