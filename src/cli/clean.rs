use std::process::ExitCode;

use crate::clean;
use crate::error::Result;
use crate::models::{Day, Year};

use super::Workspace;

pub fn clean(workspace: &Workspace, year: Year, day: Option<Day>) -> Result<ExitCode> {
    let removed = clean::clean(&workspace.paths, year, day)?;
    println!("Removed {}", removed.display());
    Ok(ExitCode::SUCCESS)
}
