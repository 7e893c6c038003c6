use std::fs;
use std::path::PathBuf;

use crate::error::{AdventError, Result};
use crate::models::{Day, Year};
use crate::paths::ChallengePaths;

/// Removes a whole year, or only one day when `day` is given.
///
/// The year directory must exist. Removal failures are returned, never
/// swallowed.
pub fn clean(paths: &ChallengePaths, year: Year, day: Option<Day>) -> Result<PathBuf> {
    let base = paths.year_dir(year);
    let meta = fs::metadata(&base).map_err(|e| AdventError::io(&base, e))?;
    if !meta.is_dir() {
        return Err(AdventError::NotADirectory(base));
    }

    let target = match day {
        Some(day) => base.join(day.dir_name()),
        None => base,
    };

    log::info!("removing {}", target.display());
    fs::remove_dir_all(&target).map_err(|e| AdventError::io(&target, e))?;
    Ok(target)
}
