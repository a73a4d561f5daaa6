//! Member management service

use validator::Validate;

use crate::{
    error::{field_errors, validation_errors, AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
    repository::Repository,
};

const DUPLICATE_NAME: &str = "A member with this first name and last name already exists";

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Member>> {
        self.repository.members.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        self.repository.members.get_by_id(id).await
    }

    /// Validate, guard the (first, last) natural key, then insert
    pub async fn create(&self, mut input: CreateMember) -> AppResult<Member> {
        input.normalize();
        input.validate().map_err(|e| validation_errors(e, CreateMember::FIELD_ORDER))?;

        if self
            .repository
            .members
            .name_exists(&input.member_first_name, &input.member_last_name)
            .await?
        {
            return Err(AppError::Conflict(field_errors(
                &["member_first_name", "member_last_name"],
                DUPLICATE_NAME,
            )));
        }

        self.repository.members.create(&input).await
    }

    pub async fn update(&self, id: i32, mut input: UpdateMember) -> AppResult<Member> {
        input.normalize();
        input.validate().map_err(|e| validation_errors(e, UpdateMember::FIELD_ORDER))?;

        self.repository.members.update(id, &input).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.members.delete(id).await
    }
}
