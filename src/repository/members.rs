//! Members repository for database operations

use chrono::Utc;
use sqlx::{Pool, Postgres};

use crate::{
    error::{field_errors, is_unique_violation, AppError, AppResult},
    models::member::{CreateMember, Member, UpdateMember},
};

const DUPLICATE_NAME: &str = "A member with this first name and last name already exists";

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Postgres>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all members ordered by primary key
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY member_id ASC")
            .fetch_all(&self.pool)
            .await?;
        Ok(members)
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE member_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No member found with id {}", id)))
    }

    /// Check if a member with this name pair already exists
    pub async fn name_exists(&self, first_name: &str, last_name: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM members WHERE member_first_name = $1 AND member_last_name = $2)",
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Insert a new member
    pub async fn create(&self, member: &CreateMember) -> AppResult<Member> {
        let now = Utc::now();
        let created_date = member.created_date.unwrap_or(now);
        let changed_date = member.changed_date.unwrap_or(now);

        let member = sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (member_first_name, member_last_name, phone_1, phone_2,
                                 street_1, street_2, city, state, country, zip_code,
                                 created_date, changed_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&member.member_first_name)
        .bind(&member.member_last_name)
        .bind(&member.phone_1)
        .bind(&member.phone_2)
        .bind(&member.street_1)
        .bind(&member.street_2)
        .bind(&member.city)
        .bind(&member.state)
        .bind(&member.country)
        .bind(&member.zip_code)
        .bind(created_date)
        .bind(changed_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(field_errors(
                    &["member_first_name", "member_last_name"],
                    DUPLICATE_NAME,
                ))
            } else {
                e.into()
            }
        })?;
        Ok(member)
    }

    /// Update a member by ID
    pub async fn update(&self, id: i32, member: &UpdateMember) -> AppResult<Member> {
        let changed_date = member.changed_date.unwrap_or_else(Utc::now);

        sqlx::query_as::<_, Member>(
            r#"
            UPDATE members
            SET member_first_name = $1, member_last_name = $2, phone_1 = $3, phone_2 = $4,
                street_1 = $5, street_2 = $6, city = $7, state = $8, country = $9,
                zip_code = $10, changed_date = $11
            WHERE member_id = $12
            RETURNING *
            "#,
        )
        .bind(&member.member_first_name)
        .bind(&member.member_last_name)
        .bind(&member.phone_1)
        .bind(&member.phone_2)
        .bind(&member.street_1)
        .bind(&member.street_2)
        .bind(&member.city)
        .bind(&member.state)
        .bind(&member.country)
        .bind(&member.zip_code)
        .bind(changed_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(field_errors(
                    &["member_first_name", "member_last_name"],
                    DUPLICATE_NAME,
                ))
            } else {
                e.into()
            }
        })?
        .ok_or_else(|| AppError::NotFound(format!("No member found with id {}", id)))
    }

    /// Delete a member by ID (their loans cascade)
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM members WHERE member_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("No member found with id {}", id)));
        }
        Ok(())
    }
}
