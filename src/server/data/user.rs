//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing account records in the
//! database. It handles account creation, lookups by id, email or username, profile and
//! role updates, and deletion together with the user's lands, converting entity models
//! into domain models at the infrastructure boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::user::{CreateUserParams, Role, UpdateUserParams, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// Expects validated, normalized values; uniqueness of username and email is
    /// checked by the service beforehand and enforced again by unique indexes.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Database error during insert, including unique violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let entity = entity::user::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            phone: ActiveValue::Set(params.phone),
            address: ActiveValue::Set(params.address),
            profile_image: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email address. Emails are stored lowercase.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email.trim().to_lowercase()))
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user whose email or username matches `identifier`.
    ///
    /// Used by login, which accepts either. The email comparison is case-insensitive,
    /// the username comparison exact.
    pub async fn find_by_identifier(&self, identifier: &str) -> Result<Option<User>, AppError> {
        let identifier = identifier.trim();

        entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Email.eq(identifier.to_lowercase()))
                    .add(entity::user::Column::Username.eq(identifier)),
            )
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Checks whether `username` is taken by a user other than `excluding`.
    pub async fn username_taken(
        &self,
        username: &str,
        excluding: Option<i32>,
    ) -> Result<bool, AppError> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Username.eq(username));
        if let Some(id) = excluding {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether `email` is taken by a user other than `excluding`.
    pub async fn email_taken(&self, email: &str, excluding: Option<i32>) -> Result<bool, AppError> {
        let mut query = entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));
        if let Some(id) = excluding {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Gets all users with pagination, ordered by username.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total_users, total_pages))` - Users for the requested page and counts
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .paginate(self.db, per_page);

        let counts = paginator.num_items_and_pages().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, counts.number_of_items, counts.number_of_pages))
    }

    /// Applies the provided profile changes.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::DbErr(RecordNotFound))` - No user with that ID
    /// - `Err(AppError::DbErr)` - Other database error during update
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let mut active_model = self.find_active_model(id).await?;

        if let Some(full_name) = params.full_name {
            active_model.full_name = ActiveValue::Set(full_name);
        }
        if let Some(username) = params.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(Some(phone));
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(Some(address));
        }

        User::from_entity(active_model.update(self.db).await?)
    }

    pub async fn set_role(&self, id: i32, role: Role) -> Result<User, AppError> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.role = ActiveValue::Set(role.as_str().to_string());

        User::from_entity(active_model.update(self.db).await?)
    }

    pub async fn set_profile_image(&self, id: i32, path: String) -> Result<User, AppError> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.profile_image = ActiveValue::Set(Some(path));

        User::from_entity(active_model.update(self.db).await?)
    }

    pub async fn set_password_hash(&self, id: i32, password_hash: String) -> Result<(), AppError> {
        let mut active_model = self.find_active_model(id).await?;
        active_model.password_hash = ActiveValue::Set(password_hash);
        active_model.update(self.db).await?;

        Ok(())
    }

    /// Deletes a user and every land they own in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted along with their lands
    /// - `Ok(false)` - No user with that ID; nothing was changed
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn delete_with_lands(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;

        entity::prelude::Land::delete_many()
            .filter(entity::land::Column::OwnerId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::User::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        txn.commit().await?;

        Ok(true)
    }

    async fn find_active_model(&self, id: i32) -> Result<entity::user::ActiveModel, AppError> {
        let entity = entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("User with id {} not found", id)))?;

        Ok(entity.into())
    }
}
