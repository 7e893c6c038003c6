use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::{AdventError, Result};
use crate::models::{Day, Year};
use crate::paths::ChallengePaths;
use crate::templates::{Template, TEMPLATES};

/// Provisions `day01`..`day25` for `year` and copies every template into each.
///
/// An existing day directory is reused. An existing template file aborts the
/// whole run with [`AdventError::Conflict`]; files written before the
/// conflict are left in place.
pub fn generate_year(paths: &ChallengePaths, year: Year) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();

    for day in Day::all() {
        let dir = paths.day_dir(year, day);
        if dir.is_dir() {
            log::debug!("{} already exists, filling in templates", dir.display());
        } else {
            fs::create_dir_all(&dir).map_err(|e| AdventError::io(&dir, e))?;
        }

        for template in &TEMPLATES {
            copy_template(template, &dir)?;
        }
        created.push(dir);
    }

    Ok(created)
}

fn copy_template(template: &Template, dest_dir: &Path) -> Result<()> {
    let dest = dest_dir.join(template.name);

    let mut file = match OpenOptions::new().write(true).create_new(true).open(&dest) {
        Ok(f) => f,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            return Err(AdventError::Conflict(dest));
        }
        Err(e) => return Err(AdventError::io(&dest, e)),
    };

    file.write_all(template.content.as_bytes())
        .map_err(|e| AdventError::io(&dest, e))?;
    log::trace!("wrote {}", dest.display());
    Ok(())
}
