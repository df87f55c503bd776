//! Hash-cut link shortening service.

use std::sync::Arc;

use crate::domain::repositories::{LinkRepository, StorageError};
use crate::utils::code_generator::{MAX_CODE_LENGTH, fingerprint, salted};

/// Errors returned by [`LinkService`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortenError {
    /// The submitted link was empty.
    #[error("link must not be empty")]
    EmptyLink,

    /// The submitted link contained a NUL character, which text storage
    /// cannot hold.
    #[error("link must not contain NUL characters")]
    NulInLink,

    /// [`ShortenerConfig`] parameters were rejected.
    #[error("invalid shortener configuration: {0}")]
    InvalidConfig(String),

    /// The storage backend could not be queried or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),

    /// Every candidate within the retry bound was already taken.
    #[error("no free short code after {attempts} attempts")]
    ExhaustedCodeSpace { attempts: usize },
}

impl From<StorageError> for ShortenError {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::Unavailable(reason) => Self::StorageUnavailable(reason),
            other => Self::StorageUnavailable(other.to_string()),
        }
    }
}

/// Parameters of the shortening algorithm.
///
/// Validated once on construction and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenerConfig {
    code_length: usize,
    salt: String,
    max_attempts: usize,
}

impl ShortenerConfig {
    pub const DEFAULT_CODE_LENGTH: usize = 6;
    pub const DEFAULT_SALT: &'static str = "!";
    pub const DEFAULT_MAX_ATTEMPTS: usize = 16;

    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::InvalidConfig`] if:
    /// - `code_length` is 0 or longer than a hex SHA-256 digest (64)
    /// - `salt` is empty (the perturbed input would equal the original)
    /// - `max_attempts` is 0
    pub fn new(
        code_length: usize,
        salt: impl Into<String>,
        max_attempts: usize,
    ) -> Result<Self, ShortenError> {
        let salt = salt.into();

        if code_length == 0 || code_length > MAX_CODE_LENGTH {
            return Err(ShortenError::InvalidConfig(format!(
                "code length must be between 1 and {MAX_CODE_LENGTH}, got {code_length}"
            )));
        }

        if salt.is_empty() {
            return Err(ShortenError::InvalidConfig(
                "salt must not be empty".to_string(),
            ));
        }

        if max_attempts == 0 {
            return Err(ShortenError::InvalidConfig(
                "max attempts must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            code_length,
            salt,
            max_attempts,
        })
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }
}

impl Default for ShortenerConfig {
    fn default() -> Self {
        Self {
            code_length: Self::DEFAULT_CODE_LENGTH,
            salt: Self::DEFAULT_SALT.to_string(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Service for creating and resolving short codes.
///
/// Codes are truncated SHA-256 fingerprints of the link. A taken candidate
/// is resolved by prepending the salt to the working input and hashing
/// again, up to [`ShortenerConfig::max_attempts`] times. Only the original
/// link is ever persisted.
///
/// Shortening is not idempotent: the same link submitted twice finds its
/// first code taken and receives a salted one.
pub struct LinkService<R: LinkRepository + ?Sized> {
    link_repository: Arc<R>,
    config: ShortenerConfig,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<R>, config: ShortenerConfig) -> Self {
        Self {
            link_repository,
            config,
        }
    }

    pub fn config(&self) -> &ShortenerConfig {
        &self.config
    }

    /// Shortens `link` and persists the mapping.
    ///
    /// # Collision Handling
    ///
    /// A candidate counts as taken when storage already holds it, or when
    /// the insert loses a race to a concurrent writer
    /// ([`StorageError::DuplicateKey`]). Either way the input is salted and
    /// the next candidate is tried.
    ///
    /// # Errors
    ///
    /// - [`ShortenError::EmptyLink`] if `link` is empty
    /// - [`ShortenError::NulInLink`] if `link` contains `\0`
    /// - [`ShortenError::StorageUnavailable`] on storage failures
    /// - [`ShortenError::ExhaustedCodeSpace`] if no candidate was free
    pub async fn shorten(&self, link: &str) -> Result<String, ShortenError> {
        if link.is_empty() {
            return Err(ShortenError::EmptyLink);
        }

        if link.contains('\0') {
            return Err(ShortenError::NulInLink);
        }

        let mut input = link.to_string();

        for _ in 0..self.config.max_attempts {
            let code = fingerprint(&input, self.config.code_length);

            if self.link_repository.get(&code).await?.is_none() {
                match self.link_repository.add(&code, link).await {
                    Ok(()) => return Ok(code),
                    Err(StorageError::DuplicateKey { .. }) => {}
                    Err(e) => return Err(e.into()),
                }
            }

            input = salted(&self.config.salt, &input);
        }

        Err(ShortenError::ExhaustedCodeSpace {
            attempts: self.config.max_attempts,
        })
    }

    /// Resolves a short code to its original link.
    ///
    /// Codes of any length are accepted; unknown codes yield `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns [`ShortenError::StorageUnavailable`] on storage failures.
    pub async fn lookup(&self, code: &str) -> Result<Option<String>, ShortenError> {
        Ok(self.link_repository.get(code).await?)
    }

    /// Constructs the public URL for a code.
    pub fn short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/lnk/{}", base_url.trim_end_matches('/'), code)
    }
}
