//! User service for business logic.
//!
//! This module provides the `UserService` for account management: registration and
//! login, profile and role updates, profile images, password resets by emailed code and
//! the PDF profile report. Field validation happens here before anything is persisted.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{land::LandRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::user::{
        CreateUserParams, PaginatedUsers, RegisterUserParams, Role, UpdateUserParams, User,
    },
    service::{
        document,
        mail::{Email, Mailer},
        password_reset::PasswordResetService,
        storage::FileStorage,
        token::TokenService,
    },
    util::{
        upload::UploadedFile,
        validate::{
            optional_text, require_text, validate_email, validate_password, validate_phone,
            validate_username,
        },
    },
};

/// Largest page size accepted when listing users.
const MAX_PER_PAGE: u64 = 100;

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new farmer account.
    ///
    /// Validates every field, rejects a username or email already in use (email
    /// compared case-insensitively) and stores a bcrypt hash of the password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account with the farmer role
    /// - `Err(AppError::BadRequest)` - Invalid field, or username/email already registered
    /// - `Err(AppError::BcryptErr)` - Password hashing failed
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let full_name = require_text("fullName", &params.full_name)?;
        let username = validate_username(&params.username)?;
        let email = validate_email(&params.email)?;
        validate_password(&params.password)?;
        let phone = optional_text(params.phone)
            .map(|phone| validate_phone(&phone))
            .transpose()?;
        let address = optional_text(params.address);

        if user_repo.username_taken(&username, None).await? {
            return Err(AppError::BadRequest("Username is already taken".to_string()));
        }
        if user_repo.email_taken(&email, None).await? {
            return Err(AppError::BadRequest(
                "Email is already registered".to_string(),
            ));
        }

        let password_hash = bcrypt::hash(&params.password, bcrypt::DEFAULT_COST)?;

        let user = user_repo
            .create(CreateUserParams {
                full_name,
                username,
                email,
                password_hash,
                role: Role::Farmer,
                phone,
                address,
            })
            .await?;

        tracing::info!("Registered user {} ({})", user.username, user.id);

        Ok(user)
    }

    /// Authenticates by email or username and issues a bearer token.
    ///
    /// # Returns
    /// - `Ok((token, user))` - Credentials matched
    /// - `Err(AuthError::InvalidCredentials)` - Unknown identifier or wrong password
    pub async fn login(
        &self,
        tokens: &TokenService,
        identifier: &str,
        password: &str,
    ) -> Result<(String, User), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_identifier(identifier.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = tokens.issue(&user)?;

        Ok((token, user))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        UserRepository::new(self.db).find_by_id(id).await
    }

    /// Retrieves all users with pagination.
    ///
    /// `per_page` is clamped to 1..=100.
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let per_page = per_page.clamp(1, MAX_PER_PAGE);

        let (users, total, total_pages) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates profile fields, re-checking username and email uniqueness.
    ///
    /// # Returns
    /// - `Ok(User)` - Updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - Invalid field, or username/email used by another account
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(id).await?.is_none() {
            return Err(user_not_found(id));
        }

        let full_name = params
            .full_name
            .map(|name| require_text("fullName", &name))
            .transpose()?;
        let username = params
            .username
            .map(|username| validate_username(&username))
            .transpose()?;
        let email = params
            .email
            .map(|email| validate_email(&email))
            .transpose()?;
        let phone = params
            .phone
            .map(|phone| validate_phone(&phone))
            .transpose()?;

        if let Some(username) = &username {
            if user_repo.username_taken(username, Some(id)).await? {
                return Err(AppError::BadRequest("Username is already taken".to_string()));
            }
        }
        if let Some(email) = &email {
            if user_repo.email_taken(email, Some(id)).await? {
                return Err(AppError::BadRequest(
                    "Email is already registered".to_string(),
                ));
            }
        }

        user_repo
            .update(
                id,
                UpdateUserParams {
                    full_name,
                    username,
                    email,
                    phone,
                    address: optional_text(params.address),
                },
            )
            .await
    }

    /// Changes a user's role.
    ///
    /// # Returns
    /// - `Ok(User)` - User with the new role
    /// - `Err(AppError::BadRequest)` - Role is not `farmer` or `admin`
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn set_role(&self, id: i32, role: &str) -> Result<User, AppError> {
        let role = Role::parse(role).ok_or_else(|| {
            AppError::BadRequest("Role must be either 'farmer' or 'admin'".to_string())
        })?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(id).await?.is_none() {
            return Err(user_not_found(id));
        }

        let user = user_repo.set_role(id, role).await?;
        tracing::info!("User {} is now {}", user.id, role.as_str());

        Ok(user)
    }

    /// Deletes a user and their lands, then their profile image.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, id: i32, storage: &FileStorage) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Err(user_not_found(id));
        };

        if !user_repo.delete_with_lands(id).await? {
            return Err(user_not_found(id));
        }

        if let Some(image) = user.profile_image {
            storage.remove_upload(&image).await;
        }

        Ok(())
    }

    /// Stores a new profile image, replacing and removing any previous one.
    pub async fn set_profile_image(
        &self,
        id: i32,
        storage: &FileStorage,
        image: UploadedFile,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(id).await? else {
            return Err(user_not_found(id));
        };

        let path = storage.save_image(image, "profile").await?;
        let updated = user_repo.set_profile_image(id, path).await?;

        if let Some(previous) = user.profile_image {
            storage.remove_upload(&previous).await;
        }

        Ok(updated)
    }

    /// Issues a password reset code and emails it to the account holder.
    ///
    /// # Returns
    /// - `Ok(())` - Code issued and handed to the mailer
    /// - `Err(AppError::NotFound)` - No account with that email
    /// - `Err(AppError::SmtpErr)` - Email could not be sent
    pub async fn request_password_reset(
        &self,
        email: &str,
        reset_codes: &PasswordResetService,
        mailer: &dyn Mailer,
    ) -> Result<(), AppError> {
        let email = validate_email(email)?;

        let Some(user) = UserRepository::new(self.db).find_by_email(&email).await? else {
            return Err(AppError::NotFound(
                "No account is registered with that email".to_string(),
            ));
        };

        let code = reset_codes.generate(&user.email).await;

        mailer
            .send(Email {
                to: user.email.clone(),
                subject: "AgroSphere password reset code".to_string(),
                body: format!(
                    "Hello {},\n\nYour password reset code is {}. It expires in 10 minutes.\n\n\
                     If you did not request a reset you can ignore this email.",
                    user.full_name, code
                ),
                attachment: None,
            })
            .await?;

        tracing::info!("Issued password reset code for user {}", user.id);

        Ok(())
    }

    /// Sets a new password after validating a single-use reset code.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AppError::BadRequest)` - Weak password, or wrong/expired/used code
    /// - `Err(AppError::NotFound)` - Account no longer exists
    pub async fn reset_password(
        &self,
        email: &str,
        code: &str,
        new_password: &str,
        reset_codes: &PasswordResetService,
    ) -> Result<(), AppError> {
        let email = validate_email(email)?;
        validate_password(new_password)?;

        if !reset_codes.validate_and_consume(&email, code.trim()).await {
            return Err(AppError::BadRequest(
                "Invalid or expired reset code".to_string(),
            ));
        }

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_email(&email).await? else {
            return Err(AppError::NotFound(
                "No account is registered with that email".to_string(),
            ));
        };

        let password_hash = bcrypt::hash(new_password, bcrypt::DEFAULT_COST)?;
        user_repo.set_password_hash(user.id, password_hash).await?;

        tracing::info!("Password reset for user {}", user.id);

        Ok(())
    }

    /// Renders the profile report PDF, stores a copy and returns its bytes.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - PDF document
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn render_report(&self, id: i32, storage: &FileStorage) -> Result<Vec<u8>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(id).await? else {
            return Err(user_not_found(id));
        };
        let lands = LandRepository::new(self.db).get_all(Some(id)).await?;

        let pdf = document::render_user_report(&user, &lands)?;
        storage
            .save_report(&format!("user-{}-report.pdf", user.id), &pdf)
            .await?;

        Ok(pdf)
    }
}

fn user_not_found(id: i32) -> AppError {
    AppError::NotFound(format!("User {} not found", id))
}
