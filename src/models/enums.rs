//! Shared domain status enums
//!
//! The stored columns are plain VARCHAR, but every call site goes through
//! these enums so the status-propagation branches can never miss on a stray
//! casing. Parsing is lenient towards the legacy labels found in old rows
//! ("Checked-Out", "checked-out", "available"); serialization always emits
//! the canonical form.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Error, Debug)]
#[error("unknown status label: {0}")]
pub struct ParseStatusError(String);

// ---------------------------------------------------------------------------
// LoanStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a loan. A loan is "open" unless it is `Returned`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum LoanStatus {
    CheckedOut,
    Returned,
    Overdue,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::CheckedOut => "CheckedOut",
            LoanStatus::Returned => "Returned",
            LoanStatus::Overdue => "Overdue",
        }
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LoanStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "checkedout" => Ok(LoanStatus::CheckedOut),
            "returned" => Ok(LoanStatus::Returned),
            "overdue" => Ok(LoanStatus::Overdue),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl TryFrom<String> for LoanStatus {
    type Error = ParseStatusError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

// ---------------------------------------------------------------------------
// BookStatus
// ---------------------------------------------------------------------------

/// Availability of a book, denormalized onto `books.book_status` and
/// mirrored into `bookaudits.book_status` by the loan lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BookStatus {
    Available,
    Unavailable,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "Available",
            BookStatus::Unavailable => "Unavailable",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "available" => Ok(BookStatus::Available),
            // Old rows label an on-loan book "Checked-Out"
            "unavailable" | "checkedout" => Ok(BookStatus::Unavailable),
            _ => Err(ParseStatusError(s.to_string())),
        }
    }
}

impl TryFrom<String> for BookStatus {
    type Error = ParseStatusError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loan_status_accepts_legacy_casings() {
        assert_eq!("CheckedOut".parse::<LoanStatus>().unwrap(), LoanStatus::CheckedOut);
        assert_eq!("Checked-Out".parse::<LoanStatus>().unwrap(), LoanStatus::CheckedOut);
        assert_eq!("checked-out".parse::<LoanStatus>().unwrap(), LoanStatus::CheckedOut);
        assert_eq!("returned".parse::<LoanStatus>().unwrap(), LoanStatus::Returned);
        assert_eq!("Overdue".parse::<LoanStatus>().unwrap(), LoanStatus::Overdue);
        assert!("lost".parse::<LoanStatus>().is_err());
    }

    #[test]
    fn book_status_folds_checked_out_into_unavailable() {
        assert_eq!("Available".parse::<BookStatus>().unwrap(), BookStatus::Available);
        assert_eq!("Checked-Out".parse::<BookStatus>().unwrap(), BookStatus::Unavailable);
        assert_eq!("Unavailable".parse::<BookStatus>().unwrap(), BookStatus::Unavailable);
    }

    #[test]
    fn canonical_labels_round_trip() {
        for status in [LoanStatus::CheckedOut, LoanStatus::Returned, LoanStatus::Overdue] {
            assert_eq!(status.as_str().parse::<LoanStatus>().unwrap(), status);
        }
        for status in [BookStatus::Available, BookStatus::Unavailable] {
            assert_eq!(status.as_str().parse::<BookStatus>().unwrap(), status);
        }
    }

    #[test]
    fn serde_emits_canonical_labels() {
        assert_eq!(serde_json::to_string(&LoanStatus::CheckedOut).unwrap(), "\"CheckedOut\"");
        assert_eq!(serde_json::to_string(&BookStatus::Unavailable).unwrap(), "\"Unavailable\"");
    }
}
