//! User domain models and parameters.
//!
//! Provides the account model with its role, plus parameter types used by the user
//! service for registration, profile updates and paginated listing.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, RegisterUserDto, UpdateUserDto, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// Account role controlling access to admin-only operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Farmer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Farmer => "farmer",
            Self::Admin => "admin",
        }
    }

    /// Parses a stored or requested role name, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "farmer" => Some(Self::Farmer),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// Registered AgroSphere account.
///
/// The password hash never leaves the server; `into_dto` drops it.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Public path of the uploaded profile image.
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored role is not recognized
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let role = Role::parse(&entity.role).ok_or_else(|| InternalError::UnknownStoredValue {
            field: "user.role",
            value: entity.role.clone(),
        })?;

        Ok(Self {
            id: entity.id,
            full_name: entity.full_name,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password_hash,
            role,
            phone: entity.phone,
            address: entity.address,
            profile_image: entity.profile_image,
            created_at: entity.created_at,
        })
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            full_name: self.full_name,
            username: self.username,
            email: self.email,
            role: self.role.as_str().to_string(),
            phone: self.phone,
            address: self.address,
            profile_image: self.profile_image,
            created_at: self.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether this user may act on a resource owned by `owner_id`.
    pub fn owns_or_admin(&self, owner_id: i32) -> bool {
        self.id == owner_id || self.is_admin()
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    /// Total number of users across all pages.
    pub total: u64,
    /// Zero-indexed page number.
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Raw registration input, validated by the user service.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            username: dto.username,
            email: dto.email,
            password: dto.password,
            phone: dto.phone,
            address: dto.address,
        }
    }
}

/// Validated values for inserting a user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Profile fields to change; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub full_name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            username: dto.username,
            email: dto.email,
            phone: dto.phone,
            address: dto.address,
        }
    }
}
