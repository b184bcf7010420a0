//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Password Policy
// =============================================================================

/// Symbols counted toward the special-character requirement
pub const PASSWORD_SYMBOLS: &str = "!@#$%^&*()-=_+";

/// Minimum length for a password to be considered valid at all
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Longest password still graded Acceptable; anything longer is an
/// Excellent candidate
pub const ACCEPTABLE_MAX_LENGTH: usize = 14;

// =============================================================================
// Password Generation
// =============================================================================

/// Generated length range for Basic passwords (inclusive).
/// A Basic-length password can never pass validation; the range is kept
/// as-is from the reference policy rather than widened.
pub const BASIC_LENGTH_RANGE: (usize, usize) = (6, 7);

/// Generated length range for Acceptable passwords (inclusive)
pub const ACCEPTABLE_LENGTH_RANGE: (usize, usize) = (8, 14);

/// Generated length range for Excellent passwords (inclusive).
/// Starts above ACCEPTABLE_MAX_LENGTH so every generated password grades
/// at the requested tier.
pub const EXCELLENT_LENGTH_RANGE: (usize, usize) = (15, 35);

/// Attempt cap for the rejection-sampling loop. Expected attempts are in
/// the single digits for the alphabet in use; hitting the cap means the
/// RNG or the policy constants are broken.
pub const MAX_GENERATION_ATTEMPTS: u32 = 1000;

// =============================================================================
// Account Fields
// =============================================================================

/// Username shape: letters, digits, underscore, dash; 3 to 20 characters
pub const USERNAME_PATTERN: &str = r"^[A-Za-z0-9_-]{3,20}$";

/// Email address grammar: local part, dot-separated domain, TLD of at
/// least two letters. Purely syntactic, never resolved.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Minimum username length, re-checked before persistence
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Avatar reference assigned to new accounts
pub const DEFAULT_AVATAR: &str = "default.jpg";

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Moderator role: content-editing privileges
pub const ROLE_MODERATOR: &str = "moderator";

/// Administrator role with elevated privileges
pub const ROLE_ADMINISTRATOR: &str = "administrator";

/// All valid role values
pub const VALID_ROLES: &[&str] = &[ROLE_USER, ROLE_MODERATOR, ROLE_ADMINISTRATOR];

// =============================================================================
// Account Statuses
// =============================================================================

/// Account in good standing
pub const STATUS_ACTIVE: &str = "active";

/// Registered but not yet activated; the status new accounts start in
pub const STATUS_INACTIVE: &str = "inactive";

/// Account locked out by moderation
pub const STATUS_SUSPENDED: &str = "suspended";

/// All valid status values
pub const VALID_STATUSES: &[&str] = &[STATUS_ACTIVE, STATUS_INACTIVE, STATUS_SUSPENDED];

// =============================================================================
// Credential Hashing
// =============================================================================

/// Default Argon2 memory cost in KiB
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19456;

/// Default Argon2 iteration count
pub const DEFAULT_HASH_ITERATIONS: u32 = 2;

/// Default Argon2 lane count
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;
