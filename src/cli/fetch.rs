use std::env;
use std::process::ExitCode;

use crate::error::Result;
use crate::fetch::{FetchRequest, FetchTarget, Fetcher, UreqClient};

use super::Workspace;

pub fn fetch(workspace: &Workspace, request: FetchRequest) -> Result<ExitCode> {
    println!("Fetching {}", request.describe());

    let session = env::var(&workspace.config.session_env)
        .ok()
        .filter(|token| !token.trim().is_empty());
    let fetcher = Fetcher::new(UreqClient::new(), &workspace.config.base_url, session);

    let path = fetcher.fetch(&workspace.paths, request)?;
    let what = match request.target {
        FetchTarget::Input => "Input data",
        FetchTarget::Question(_) => "Question description",
    };
    println!(
        "{} for Year {}, Day {:02} has been saved to {}.",
        what,
        request.coordinate.year,
        request.coordinate.day.get(),
        path.display()
    );
    Ok(ExitCode::SUCCESS)
}
