//! Input checks shared by the store and the shell

use crate::{BookshelfError, Result};
use chrono::Datelike;
use regex::Regex;

/// The Diamond Sutra (868 CE) is the oldest dated printed book
pub const MIN_YEAR: i64 = 868;

/// Catalog names become file stems, so no separators and no hidden files
const CATALOG_NAME_PATTERN: &str = r"^[^./\\][^/\\]*$";

/// Calendar year of the local clock
pub fn current_year() -> i64 {
    chrono::Local::now().year() as i64
}

pub fn validate_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(BookshelfError::Validation(
            "Title can not be empty".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_author(author: &str) -> Result<()> {
    if author.trim().is_empty() {
        return Err(BookshelfError::Validation(
            "Author can not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Check that `year` is plain digits within `[MIN_YEAR, current_year]`
pub fn validate_year(year: &str, current_year: i64) -> Result<i64> {
    let year = year.trim();
    if year.is_empty() || !year.chars().all(|c| c.is_ascii_digit()) {
        return Err(BookshelfError::Validation(
            "Incorrect year value. Use only digits.".to_string(),
        ));
    }

    let out_of_range = || {
        BookshelfError::Validation(format!(
            "Incorrect year value. It must be in range from {} until {}",
            MIN_YEAR, current_year
        ))
    };

    let value: i64 = year.parse().map_err(|_| out_of_range())?;
    if !(MIN_YEAR..=current_year).contains(&value) {
        return Err(out_of_range());
    }
    Ok(value)
}

pub fn validate_catalog_name(name: &str) -> Result<()> {
    let name = name.trim();
    if name.is_empty() {
        return Err(BookshelfError::Validation(
            "Library name can not be empty".to_string(),
        ));
    }

    let pattern = Regex::new(CATALOG_NAME_PATTERN)?;
    if !pattern.is_match(name) {
        return Err(BookshelfError::Validation(format!(
            "Library name '{}' must not start with '.' or contain path separators",
            name
        )));
    }
    Ok(())
}
