//! Author management service

use validator::Validate;

use crate::{
    error::{field_errors, validation_errors, AppError, AppResult},
    models::author::{Author, CreateAuthor, UpdateAuthor},
    repository::Repository,
};

const DUPLICATE_NAME: &str = "An author with this first name and last name already exists";

#[derive(Clone)]
pub struct AuthorsService {
    repository: Repository,
}

impl AuthorsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.repository.authors.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Author> {
        self.repository.authors.get_by_id(id).await
    }

    /// Validate, guard the (first, last) natural key, then insert
    pub async fn create(&self, mut input: CreateAuthor) -> AppResult<Author> {
        input.normalize();
        input.validate().map_err(|e| validation_errors(e, CreateAuthor::FIELD_ORDER))?;

        if self
            .repository
            .authors
            .name_exists(&input.first_name, &input.last_name)
            .await?
        {
            return Err(AppError::Conflict(field_errors(
                &["first_name", "last_name"],
                DUPLICATE_NAME,
            )));
        }

        self.repository
            .authors
            .create(&input.first_name, &input.last_name)
            .await
    }

    pub async fn update(&self, id: i32, mut input: UpdateAuthor) -> AppResult<Author> {
        input.normalize();
        input.validate().map_err(|e| validation_errors(e, UpdateAuthor::FIELD_ORDER))?;

        self.repository
            .authors
            .update(id, &input.first_name, &input.last_name)
            .await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.authors.delete(id).await
    }
}
