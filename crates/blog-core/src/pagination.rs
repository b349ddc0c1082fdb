//! Pagination arithmetic and list-preview shaping.

use crate::error::DomainError;

/// Number of posts per list page.
pub const PAGE_SIZE: u64 = 10;

/// Bodies at least this many characters long are shortened in list responses.
pub const BODY_PREVIEW_CHARS: usize = 200;

/// Appended to a shortened body.
pub const TRUNCATION_MARKER: &str = "...";

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u64);

impl Page {
    pub const FIRST: Page = Page(1);

    /// Parse the raw `page` query value. Absent or empty means the first page.
    ///
    /// Pages whose offset does not fit a signed 64-bit integer are rejected,
    /// so `skip()` is always a valid database offset.
    pub fn parse(raw: Option<&str>) -> Result<Self, DomainError> {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Ok(Self::FIRST),
            Some(raw) => raw,
        };

        let number: i64 = raw
            .parse()
            .map_err(|_| DomainError::InvalidPage(raw.to_string()))?;
        if number < 1 || (number - 1).checked_mul(PAGE_SIZE as i64).is_none() {
            return Err(DomainError::InvalidPage(raw.to_string()));
        }

        Ok(Self(number as u64))
    }

    pub fn number(self) -> u64 {
        self.0
    }

    /// Records to skip before this page starts.
    pub fn skip(self) -> u64 {
        (self.0 - 1) * PAGE_SIZE
    }
}

/// Last page number for a collection of `total` posts.
pub fn last_page(total: u64) -> u64 {
    total.div_ceil(PAGE_SIZE)
}

/// Shorten a body for list display.
///
/// Not idempotent in general: a body of exactly 200 characters grows to 203.
pub fn truncate_body(body: &str) -> String {
    if body.chars().count() < BODY_PREVIEW_CHARS {
        return body.to_string();
    }

    let cut = body
        .char_indices()
        .nth(BODY_PREVIEW_CHARS)
        .map_or(body.len(), |(index, _)| index);
    format!("{}{TRUNCATION_MARKER}", &body[..cut])
}
