use std::process::ExitCode;

use crate::error::Result;
use crate::models::Year;
use crate::scaffold;

use super::Workspace;

pub fn generate_year(workspace: &Workspace, year: Year) -> Result<ExitCode> {
    let created = scaffold::generate_year(&workspace.paths, year)?;
    log::info!("provisioned {} day directories", created.len());

    println!("Templates for year {} have been generated successfully.", year);
    println!();
    print_next_steps(workspace, year);
    Ok(ExitCode::SUCCESS)
}

fn print_next_steps(workspace: &Workspace, year: Year) {
    let year_dir = workspace.paths.year_dir(year);
    let shown = year_dir.strip_prefix(&workspace.root).unwrap_or(&year_dir);

    println!("To make a day runnable:");
    println!();
    println!("  1. declare it in {}/mod.rs", shown.display());
    println!("  2. register it in src/challenges/mod.rs");
    println!("  3. advent --run --year {} --day 1 --part 1", year);
}
