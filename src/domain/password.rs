//! Password value object - strength policy and credential hashing.
//!
//! A `Password` can only come into existence two ways: from a plaintext that
//! passed the strength policy (and was immediately hashed), or from a hash
//! reloaded out of trusted storage. Plaintext is never retained.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use once_cell::sync::Lazy;
use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

use crate::config::{
    ACCEPTABLE_LENGTH_RANGE, ACCEPTABLE_MAX_LENGTH, BASIC_LENGTH_RANGE,
    DEFAULT_HASH_ITERATIONS, DEFAULT_HASH_MEMORY_KIB, DEFAULT_HASH_PARALLELISM,
    EXCELLENT_LENGTH_RANGE, MAX_GENERATION_ATTEMPTS, MIN_PASSWORD_LENGTH, PASSWORD_SYMBOLS,
};
use crate::errors::{AppError, AppResult};

/// Password strength tiers, weakest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Basic,
    Acceptable,
    Excellent,
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strength::Basic => write!(f, "basic"),
            Strength::Acceptable => write!(f, "acceptable"),
            Strength::Excellent => write!(f, "excellent"),
        }
    }
}

/// Outcome of grading a password against the strength policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrengthReport {
    pub tier: Strength,
    pub valid: bool,
}

/// Grade a password against the strength policy.
///
/// A password is valid only when it contains at least one uppercase letter,
/// one lowercase letter, one digit, and one symbol from [`PASSWORD_SYMBOLS`],
/// and is at least 8 characters long. 8 to 14 characters grades Acceptable;
/// longer grades Excellent unless two adjacent characters are identical,
/// which caps the tier at Acceptable without invalidating the password.
pub fn classify(password: &str) -> StrengthReport {
    const INVALID: StrengthReport = StrengthReport {
        tier: Strength::Basic,
        valid: false,
    };

    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_symbol = password.chars().any(|c| PASSWORD_SYMBOLS.contains(c));

    if !(has_upper && has_lower && has_digit && has_symbol) {
        return INVALID;
    }

    let length = password.chars().count();
    if length < MIN_PASSWORD_LENGTH {
        return INVALID;
    }

    let tier = if length <= ACCEPTABLE_MAX_LENGTH || has_adjacent_repeat(password) {
        Strength::Acceptable
    } else {
        Strength::Excellent
    };

    StrengthReport { tier, valid: true }
}

/// True when any two neighbouring characters are identical.
fn has_adjacent_repeat(password: &str) -> bool {
    password
        .chars()
        .zip(password.chars().skip(1))
        .any(|(a, b)| a == b)
}

/// Characters passwords are generated from: letters, digits, and the policy
/// symbol set. Kept aligned with the symbol set `classify` checks so every
/// generated password grades at its requested tier.
static GENERATION_ALPHABET: Lazy<Vec<char>> = Lazy::new(|| {
    ('a'..='z')
        .chain('A'..='Z')
        .chain('0'..='9')
        .chain(PASSWORD_SYMBOLS.chars())
        .collect()
});

/// Generate a random password targeting the given strength tier.
///
/// The length is drawn uniformly from the tier's range, then candidates are
/// sampled until one contains all four required character classes; Excellent
/// candidates with adjacent identical characters are rejected and resampled.
///
/// Note that a Basic-tier password is below the validity floor by
/// construction and will never pass [`classify`].
///
/// # Errors
/// Fails if no candidate survives within [`MAX_GENERATION_ATTEMPTS`].
pub fn generate(tier: Strength) -> AppResult<String> {
    let mut rng = thread_rng();

    let (min, max) = match tier {
        Strength::Basic => BASIC_LENGTH_RANGE,
        Strength::Acceptable => ACCEPTABLE_LENGTH_RANGE,
        Strength::Excellent => EXCELLENT_LENGTH_RANGE,
    };
    let length = rng.gen_range(min..=max);

    for _ in 0..MAX_GENERATION_ATTEMPTS {
        let candidate: String = (0..length)
            .map(|_| GENERATION_ALPHABET[rng.gen_range(0..GENERATION_ALPHABET.len())])
            .collect();

        let has_all_classes = candidate.chars().any(|c| c.is_ascii_lowercase())
            && candidate.chars().any(|c| c.is_ascii_uppercase())
            && candidate.chars().any(|c| c.is_ascii_digit())
            && candidate.chars().any(|c| PASSWORD_SYMBOLS.contains(c));
        if !has_all_classes {
            continue;
        }

        if tier == Strength::Excellent && has_adjacent_repeat(&candidate) {
            continue;
        }

        return Ok(candidate);
    }

    Err(AppError::internal(
        "Password generation exhausted its attempt limit",
    ))
}

/// Argon2 cost factors for credential hashing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashCost {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashCost {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_HASH_MEMORY_KIB,
            iterations: DEFAULT_HASH_ITERATIONS,
            parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl HashCost {
    /// Build an Argon2id instance with these cost factors.
    fn argon2(self) -> AppResult<Argon2<'static>> {
        let params = Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| AppError::internal(format!("Invalid hash cost factors: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

/// Hashed credential value object.
///
/// Compared by hash value. The strength tier recorded at validation time is
/// kept alongside the hash; credentials reloaded from storage carry no tier
/// because they were validated when first written.
#[derive(Clone)]
pub struct Password {
    hash: String,
    strength: Option<Strength>,
}

// Don't expose hash in debug output
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .field("strength", &self.strength)
            .finish()
    }
}

impl Password {
    /// Create a new credential by validating and hashing the plain text.
    ///
    /// # Errors
    /// Returns a password-policy error when the plain text fails [`classify`];
    /// no credential is produced in that case.
    pub fn new(plain_text: &str) -> AppResult<Self> {
        Self::new_with_cost(plain_text, HashCost::default())
    }

    /// Create a new credential with explicit Argon2 cost factors.
    pub fn new_with_cost(plain_text: &str, cost: HashCost) -> AppResult<Self> {
        let report = classify(plain_text);
        if !report.valid {
            return Err(AppError::policy("Password is not strong enough"));
        }

        let hash = Self::hash(plain_text, cost)?;
        Ok(Self {
            hash,
            strength: Some(report.tier),
        })
    }

    /// Reconstruct a credential from a stored hash.
    ///
    /// The stored value passed validation when first written, so it is
    /// accepted as-is and not re-hashed.
    pub fn from_hash(hash: String) -> Self {
        Self {
            hash,
            strength: None,
        }
    }

    /// Strength tier recorded at validation time, if this credential was
    /// created from plain text in this process.
    pub fn strength(&self) -> Option<Strength> {
        self.strength
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text candidate against this credential.
    pub fn verify(&self, plain_text: &str) -> bool {
        Self::verify_hash(plain_text, &self.hash).unwrap_or(false)
    }

    /// Hash a password with a fresh random salt.
    fn hash(plain_text: &str, cost: HashCost) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = cost
            .argon2()?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(hash.to_string())
    }

    /// Verify password against hash using the salt and cost factors embedded
    /// in the encoded hash.
    fn verify_hash(plain_text: &str, hash: &str) -> AppResult<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok())
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

/// Verify a plain text candidate against a stored hash.
///
/// Boundary helper for callers holding a raw hash (e.g. a login handler)
/// rather than a [`Password`] instance.
pub fn verify_credential(hash: &str, candidate: &str) -> bool {
    Password::from_hash(hash.to_string()).verify(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_missing_class_is_invalid() {
        // No digit
        let report = classify("Abcdefg!ijk");
        assert!(!report.valid);
        assert_eq!(report.tier, Strength::Basic);

        // No uppercase
        assert!(!classify("abcdefg1!jk").valid);
        // No lowercase
        assert!(!classify("ABCDEFG1!JK").valid);
        // No policy symbol
        assert!(!classify("Abcdefg1ijk").valid);
    }

    #[test]
    fn test_classify_symbol_outside_fixed_set_does_not_count() {
        // '~' is punctuation but not in the policy symbol set
        let report = classify("Abcdefg1~jk");
        assert!(!report.valid);
    }

    #[test]
    fn test_classify_short_with_all_classes_is_invalid() {
        let report = classify("Ab1!xyz");
        assert_eq!(report.tier, Strength::Basic);
        assert!(!report.valid);
    }

    #[test]
    fn test_classify_acceptable_range() {
        let report = classify("Str0ng!P");
        assert_eq!(report.tier, Strength::Acceptable);
        assert!(report.valid);

        // 14 characters is still Acceptable
        let report = classify("Str0ng!Pabcdef");
        assert_eq!(report.tier, Strength::Acceptable);
        assert!(report.valid);
    }

    #[test]
    fn test_classify_excellent_above_fourteen() {
        let report = classify("Str0ng!Pabcdefg");
        assert_eq!(report.tier, Strength::Excellent);
        assert!(report.valid);
    }

    #[test]
    fn test_classify_adjacent_repeat_caps_tier() {
        // 16 characters, all classes present, "bb" in the middle
        let report = classify("Str0ng!Pabbcdefg");
        assert_eq!(report.tier, Strength::Acceptable);
        assert!(report.valid);
    }

    #[test]
    fn test_strength_ordering() {
        assert!(Strength::Basic < Strength::Acceptable);
        assert!(Strength::Acceptable < Strength::Excellent);
    }

    #[test]
    fn test_generate_acceptable_grades_acceptable() {
        for _ in 0..20 {
            let password = generate(Strength::Acceptable).unwrap();
            let report = classify(&password);
            assert_eq!(report.tier, Strength::Acceptable);
            assert!(report.valid);
        }
    }

    #[test]
    fn test_generate_excellent_grades_excellent() {
        for _ in 0..20 {
            let password = generate(Strength::Excellent).unwrap();
            let report = classify(&password);
            assert_eq!(report.tier, Strength::Excellent);
            assert!(report.valid);
            assert!(!has_adjacent_repeat(&password));
        }
    }

    #[test]
    fn test_generate_basic_is_never_valid() {
        let password = generate(Strength::Basic).unwrap();
        assert!((6..=7).contains(&password.chars().count()));
        assert!(!classify(&password).valid);
    }

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "Secure!Pass123";
        let password = Password::new(plain).unwrap();

        assert!(password.verify(plain));
        assert!(!password.verify("Wrong!Pass123"));
    }

    #[test]
    fn test_password_records_strength() {
        let password = Password::new("Str0ng!Pass").unwrap();
        assert_eq!(password.strength(), Some(Strength::Acceptable));

        let password = Password::new("Str0ng!PawLonger91").unwrap();
        assert_eq!(password.strength(), Some(Strength::Excellent));
    }

    #[test]
    fn test_password_rejects_weak_plaintext() {
        let result = Password::new("weak");
        assert!(matches!(result, Err(AppError::PasswordPolicy(_))));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "Test!Password1";
        let password = Password::new(plain).unwrap();
        let hash = password.as_str().to_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify(plain));
        assert_eq!(restored.strength(), None);
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "Same!Password1";
        let pass1 = Password::new(plain).unwrap();
        let pass2 = Password::new(plain).unwrap();

        // Different salts produce different hashes
        assert_ne!(pass1.as_str(), pass2.as_str());
        // But both verify correctly
        assert!(pass1.verify(plain));
        assert!(pass2.verify(plain));
    }

    #[test]
    fn test_verify_credential_helper() {
        let password = Password::new("Boundary!Pass1").unwrap();
        assert!(verify_credential(password.as_str(), "Boundary!Pass1"));
        assert!(!verify_credential(password.as_str(), "Boundary!Pass2"));
    }

    #[test]
    fn test_debug_redacts_hash() {
        let password = Password::new("Secret!Pass12").unwrap();
        let output = format!("{:?}", password);
        assert!(output.contains("[REDACTED]"));
        assert!(!output.contains(password.as_str()));
    }
}
