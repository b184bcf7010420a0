//! User domain entity and related types.
//!
//! A `User` is constructed in one of two modes: `create` runs full structural
//! and policy validation on caller-supplied input, while reconstruction from
//! a stored record (`infra::repositories`) is trusted and skips validation,
//! since the data passed the same checks when first written.

use chrono::{Datelike, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_AVATAR, MIN_USERNAME_LENGTH, ROLE_ADMINISTRATOR, ROLE_MODERATOR, ROLE_USER,
    STATUS_ACTIVE, STATUS_INACTIVE, STATUS_SUSPENDED, USERNAME_PATTERN,
};
use crate::domain::{EmailAddress, Password};
use crate::errors::{AppError, AppResult};

static USERNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(USERNAME_PATTERN).expect("username pattern must compile"));

/// User roles enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Moderator,
    Administrator,
}

impl UserRole {
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Administrator)
    }

    pub fn is_moderator(&self) -> bool {
        matches!(self, UserRole::Moderator)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => ROLE_USER,
            UserRole::Moderator => ROLE_MODERATOR,
            UserRole::Administrator => ROLE_ADMINISTRATOR,
        }
    }
}

impl TryFrom<&str> for UserRole {
    type Error = AppError;

    fn try_from(s: &str) -> AppResult<Self> {
        match s {
            ROLE_USER => Ok(UserRole::User),
            ROLE_MODERATOR => Ok(UserRole::Moderator),
            ROLE_ADMINISTRATOR => Ok(UserRole::Administrator),
            other => Err(AppError::structural(format!(
                "Role must be one of user, moderator, administrator (got '{}')",
                other
            ))),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Account status enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Suspended,
}

impl AccountStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => STATUS_ACTIVE,
            AccountStatus::Inactive => STATUS_INACTIVE,
            AccountStatus::Suspended => STATUS_SUSPENDED,
        }
    }
}

impl TryFrom<&str> for AccountStatus {
    type Error = AppError;

    fn try_from(s: &str) -> AppResult<Self> {
        match s {
            STATUS_ACTIVE => Ok(AccountStatus::Active),
            STATUS_INACTIVE => Ok(AccountStatus::Inactive),
            STATUS_SUSPENDED => Ok(AccountStatus::Suspended),
            other => Err(AppError::structural(format!(
                "Status must be one of active, inactive, suspended (got '{}')",
                other
            ))),
        }
    }
}

impl std::fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Caller-supplied input for creating a new account.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub username: String,
    pub birth_date: NaiveDate,
    pub password: String,
}

/// User domain entity.
///
/// Exclusively owns its email address and credential; `id` is 0 until the
/// storage collaborator assigns one.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: EmailAddress,
    pub username: String,
    pub birth_date: Option<NaiveDate>,
    pub password: Option<Password>,
    pub avatar: String,
    pub role: UserRole,
    pub status: AccountStatus,
    pub verified: bool,
}

impl User {
    /// Create a new account from caller-supplied input (create mode).
    ///
    /// New accounts start unverified and inactive with the default role and
    /// avatar. The credential is constructed eagerly, so a weak password
    /// fails here, before any storage interaction.
    ///
    /// # Errors
    /// Structural error for a malformed email or username; password-policy
    /// error for a weak password.
    pub fn create(new: NewUser) -> AppResult<Self> {
        let email = EmailAddress::new(new.email);
        if !email.is_valid() {
            return Err(AppError::structural("Email is not a valid address"));
        }

        if !USERNAME_RE.is_match(&new.username) {
            return Err(AppError::structural(
                "Username must be 3-20 characters of letters, digits, '_' or '-'",
            ));
        }

        let password = Password::new(&new.password)?;

        Ok(Self {
            id: 0,
            email,
            username: new.username,
            birth_date: Some(new.birth_date),
            password: Some(password),
            avatar: DEFAULT_AVATAR.to_string(),
            role: UserRole::User,
            status: AccountStatus::Inactive,
            verified: false,
        })
    }

    /// Check every persistence precondition in order, returning the first
    /// failure's reason.
    ///
    /// Callers use the reason string for user feedback; which check failed
    /// must not be inferred any other way. Role and status cannot be out of
    /// range here because they are parsed into their enumerations at the
    /// boundary.
    pub fn validate_for_persistence(&self) -> AppResult<()> {
        if self.email.as_str().is_empty() {
            return Err(AppError::structural("Email is required"));
        }
        if !self.email.is_valid() {
            return Err(AppError::structural("Email is not a valid address"));
        }
        if self.username.is_empty() {
            return Err(AppError::structural("Username is required"));
        }
        if self.username.chars().count() < MIN_USERNAME_LENGTH {
            return Err(AppError::structural(format!(
                "Username must be at least {} characters",
                MIN_USERNAME_LENGTH
            )));
        }
        // A Password only exists if its plaintext passed the policy or it was
        // reloaded from trusted storage, so presence implies validity.
        if self.password.is_none() {
            return Err(AppError::policy("Password is required"));
        }
        if self.birth_date.is_none() {
            return Err(AppError::structural("Birth date is required"));
        }
        if self.avatar.is_empty() {
            return Err(AppError::structural("Avatar reference is required"));
        }
        Ok(())
    }

    /// Age in whole years as of `today`; `None` without a birth date.
    pub fn age_on(&self, today: NaiveDate) -> Option<i32> {
        let birth = self.birth_date?;
        let mut age = today.year() - birth.year();
        if (today.month(), today.day()) < (birth.month(), birth.day()) {
            age -= 1;
        }
        Some(age)
    }

    /// Age in whole years as of the current date.
    pub fn age(&self) -> Option<i32> {
        self.age_on(Utc::now().date_naive())
    }

    /// Check if user has the administrator role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Check if user has the moderator role
    pub fn is_moderator(&self) -> bool {
        self.role.is_moderator()
    }

    /// Administrators and moderators may edit content
    pub fn can_edit_content(&self) -> bool {
        self.is_admin() || self.is_moderator()
    }

    /// Check if the account is in active status
    pub fn is_active_account(&self) -> bool {
        self.status == AccountStatus::Active
    }

    /// Update user's role
    pub fn update_role(&mut self, role: UserRole) {
        self.role = role;
    }

    /// Update account status
    pub fn update_status(&mut self, status: AccountStatus) {
        self.status = status;
    }
}
