//! Colaborator service - orchestrates colaborator operations.

use std::sync::Arc;

use crate::domain::{Colaborator, NewColaborator};
use crate::ports::{ColaboratorRepository, CoreError};
use crate::schema::COLABORATOR;

/// Service for colaborator operations.
pub struct ColaboratorService {
    repo: Arc<dyn ColaboratorRepository>,
}

impl ColaboratorService {
    /// Create a new colaborator service.
    pub fn new(repo: Arc<dyn ColaboratorRepository>) -> Self {
        Self { repo }
    }

    /// List all colaborators.
    pub async fn list(&self) -> Result<Vec<Colaborator>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Get a colaborator by id.
    pub async fn get(&self, id: i64) -> Result<Colaborator, CoreError> {
        self.repo.get_by_id(id).await.map_err(CoreError::from)
    }

    /// Validate and store a new colaborator.
    pub async fn create(&self, colaborator: NewColaborator) -> Result<Colaborator, CoreError> {
        validate(&colaborator)?;
        let created = self.repo.insert(&colaborator).await?;
        tracing::debug!(id = created.id, "Colaborator created");
        Ok(created)
    }
}

fn validate(colaborator: &NewColaborator) -> Result<(), CoreError> {
    COLABORATOR
        .validate(&colaborator.column_values())
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    let email = colaborator.email.trim();
    // Exactly one '@' with text on both sides
    match email.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(CoreError::Validation(format!(
            "Invalid email address: {email}"
        ))),
    }
}
