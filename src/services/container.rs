//! Service Container - Centralized service access.
//!
//! Constructed once at process start from a repository handle and passed
//! into callers by reference; never rebuilt per request.

use std::sync::Arc;

use super::{AuthService, Authenticator, Registrar, RegistrationService};
use crate::infra::{SessionGate, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get registration service
    fn registration(&self) -> Arc<dyn RegistrationService>;

    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    registration_service: Arc<dyn RegistrationService>,
    auth_service: Arc<dyn AuthService>,
}

impl Services {
    /// Create a new service container with all services initialized
    pub fn new(
        registration_service: Arc<dyn RegistrationService>,
        auth_service: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            registration_service,
            auth_service,
        }
    }

    /// Create service container from collaborator handles
    pub fn from_collaborators(
        repo: Arc<dyn UserRepository>,
        sessions: Arc<dyn SessionGate>,
    ) -> Self {
        let registration_service = Arc::new(Registrar::new(repo.clone()));
        let auth_service = Arc::new(Authenticator::new(repo, sessions));

        Self {
            registration_service,
            auth_service,
        }
    }
}

impl ServiceContainer for Services {
    fn registration(&self) -> Arc<dyn RegistrationService> {
        self.registration_service.clone()
    }

    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }
}
