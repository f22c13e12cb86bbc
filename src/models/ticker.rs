use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub const MAX_TICKER_LEN: usize = 6;

/// Exchange ticker symbol, normalized to upper case and checked against `^[A-Z.]{1,6}$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticker(String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TickerError {
    #[error("stock ticker is required")]
    Missing,

    #[error("ticker must be between 1-6 characters")]
    InvalidLength { len: usize },

    #[error("ticker contains invalid characters")]
    InvalidCharacter { ch: char },
}

impl Ticker {
    /// Trims and upper-cases `raw` before validating it.
    pub fn parse(raw: &str) -> Result<Self, TickerError> {
        let ticker = raw.trim().to_ascii_uppercase();
        if ticker.is_empty() {
            return Err(TickerError::Missing);
        }

        let len = ticker.chars().count();
        if len > MAX_TICKER_LEN {
            return Err(TickerError::InvalidLength { len });
        }

        if let Some(ch) = ticker.chars().find(|c| !(c.is_ascii_uppercase() || *c == '.')) {
            return Err(TickerError::InvalidCharacter { ch });
        }

        Ok(Self(ticker))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Ticker {
    type Err = TickerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
