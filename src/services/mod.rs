//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and collaborator boundaries to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod auth_service;
pub mod container;
mod registration_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator};
pub use registration_service::{
    Registrar, RegistrationOutcome, RegistrationRequest, RegistrationService,
};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
