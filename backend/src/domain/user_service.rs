use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use super::commands::users::{LoginCommand, RegisterUserCommand, RegisterUserResult};
use super::models::UserValidationError;
use crate::storage::UserStorage;

/// Service for logging users in and registering new ones
#[derive(Clone)]
pub struct UserService {
    storage: Arc<dyn UserStorage>,
}

impl UserService {
    pub fn new(storage: Arc<dyn UserStorage>) -> Self {
        Self { storage }
    }

    /// Make sure the user file exists with its bootstrap account
    pub fn initialize(&self) -> Result<()> {
        self.storage.initialize()
    }

    /// Check the credentials; passwords are compared as stored, in plain text
    pub fn login(&self, command: LoginCommand) -> Result<bool> {
        let authenticated = self.storage.authenticate(&command.login, &command.password)?;

        if authenticated {
            info!("User '{}' logged in", command.login);
        } else {
            warn!("Failed login attempt for '{}'", command.login);
        }
        Ok(authenticated)
    }

    pub fn register(&self, command: RegisterUserCommand) -> Result<RegisterUserResult> {
        info!("Registering user: {}", command.login);

        if command.login.trim().is_empty() {
            return Err(UserValidationError::EmptyLogin.into());
        }
        if command.password.is_empty() {
            return Err(UserValidationError::EmptyPassword.into());
        }

        if self.storage.register(&command.login, &command.password)? {
            Ok(RegisterUserResult::Registered)
        } else {
            Ok(RegisterUserResult::LoginTaken)
        }
    }
}
