/// Headline input validation

use thiserror::Error;

/// Why a headline was refused before any request went out.
/// The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeadlineError {
    #[error("Lütfen bir başlık girin!")]
    Empty,
    #[error("Başlık çok kısa! En az {min} karakter girin.")]
    TooShort { min: usize },
}

/// A trimmed headline that passed validation and may be sent to `/predict`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Headline(String);

impl Headline {
    /// Validate raw textarea content.
    ///
    /// Checks run in order: blank input first, then the minimum length.
    /// Length is counted in characters of the trimmed text, not bytes, so
    /// Turkish letters such as "ş" count once.
    pub fn parse(raw: &str, min_chars: usize) -> Result<Headline, HeadlineError> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(HeadlineError::Empty);
        }

        if trimmed.chars().count() < min_chars {
            return Err(HeadlineError::TooShort { min: min_chars });
        }

        Ok(Headline(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
