//! Downloads puzzle statements and inputs from the puzzle site.
//!
//! The statement page is scraped for its `.day-desc` blocks; part two is
//! appended to an existing `question.md` under a `---` separator so both
//! halves of a puzzle end up in one document.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use scraper::{Html, Selector};

use crate::error::{AdventError, Result};
use crate::models::{Coordinate, Part};
use crate::paths::{ChallengePaths, DEFAULT_INPUT_FILE, QUESTION_FILE};

const DESCRIPTION_SELECTOR: &str = ".day-desc";
const PART_SEPARATOR: &str = "\n\n---\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTarget {
    Input,
    Question(Part),
}

#[derive(Debug, Clone, Copy)]
pub struct FetchRequest {
    pub coordinate: Coordinate,
    pub target: FetchTarget,
}

impl FetchRequest {
    pub fn url(&self, base_url: &str) -> String {
        let base = base_url.trim_end_matches('/');
        let Coordinate { year, day } = self.coordinate;
        match self.target {
            FetchTarget::Input => format!("{base}/{year}/day/{day}/input"),
            FetchTarget::Question(_) => format!("{base}/{year}/day/{day}"),
        }
    }

    pub fn describe(&self) -> String {
        let what = match self.target {
            FetchTarget::Input => "input",
            FetchTarget::Question(_) => "question",
        };
        format!(
            "{what} for {} day {}",
            self.coordinate.year, self.coordinate.day
        )
    }
}

#[derive(Debug)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub trait HttpClient {
    /// Issues a GET, returning the response for any HTTP status.
    fn get(&self, url: &str, cookie: Option<&str>) -> Result<HttpResponse>;
}

pub struct UreqClient {
    agent: ureq::Agent,
}

impl UreqClient {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(concat!("advent/", env!("CARGO_PKG_VERSION")))
            .build();
        Self { agent }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqClient {
    fn get(&self, url: &str, cookie: Option<&str>) -> Result<HttpResponse> {
        let mut request = self.agent.get(url);
        if let Some(cookie) = cookie {
            request = request.set("Cookie", cookie);
        }

        let response = match request.call() {
            Ok(response) => response,
            Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(e)) => {
                return Err(AdventError::Remote(format!("Error fetching data: {e}")));
            }
        };

        let status = response.status();
        let status_text = response.status_text().to_string();
        let body = response
            .into_string()
            .map_err(|e| AdventError::Remote(format!("Error reading response from {url}: {e}")))?;

        Ok(HttpResponse {
            status,
            status_text,
            body,
        })
    }
}

pub struct Fetcher<C> {
    client: C,
    base_url: String,
    session: Option<String>,
}

impl<C: HttpClient> Fetcher<C> {
    pub fn new(client: C, base_url: impl Into<String>, session: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            session,
        }
    }

    /// Fetches the request and stores it in the day directory.
    /// Returns the path that was written.
    pub fn fetch(&self, paths: &ChallengePaths, request: FetchRequest) -> Result<PathBuf> {
        let url = request.url(&self.base_url);
        log::info!("fetching {} from {url}", request.describe());

        if self.session.is_none() {
            log::warn!("no session token configured, the request will be anonymous");
        }
        let cookie = self.session.as_ref().map(|token| format!("session={token}"));

        let response = self.client.get(&url, cookie.as_deref())?;
        if !response.is_ok() {
            return Err(AdventError::Remote(format!(
                "Error fetching data: {} {}",
                response.status, response.status_text
            )));
        }

        let coordinate = request.coordinate;
        match request.target {
            FetchTarget::Input => save_input(paths, coordinate, &response.body),
            FetchTarget::Question(part) => save_question(paths, coordinate, &response.body, part),
        }
    }
}

/// Returns the inner HTML of the `part`-th `.day-desc` block.
pub fn extract_description(html: &str, part: Part) -> Result<String> {
    let selector = Selector::parse(DESCRIPTION_SELECTOR).map_err(|e| {
        AdventError::Remote(format!("invalid selector {DESCRIPTION_SELECTOR}: {e}"))
    })?;
    let document = Html::parse_document(html);

    document
        .select(&selector)
        .nth(usize::from(part.number()) - 1)
        .map(|element| element.inner_html())
        .filter(|description| !description.trim().is_empty())
        .ok_or_else(|| {
            AdventError::Remote(format!(
                "Could not find the question description ({DESCRIPTION_SELECTOR} block {part})."
            ))
        })
}

fn save_question(
    paths: &ChallengePaths,
    coordinate: Coordinate,
    html: &str,
    part: Part,
) -> Result<PathBuf> {
    let description = extract_description(html, part)?;

    let path = day_file(paths, coordinate, QUESTION_FILE)?;
    ensure_file_exists(&path)?;
    let existing = fs::read_to_string(&path).map_err(|e| AdventError::io(&path, e))?;

    let content = if part == Part::Two && !existing.trim().is_empty() {
        format!("{existing}{PART_SEPARATOR}{description}")
    } else {
        description
    };

    fs::write(&path, content).map_err(|e| AdventError::io(&path, e))?;
    Ok(path)
}

fn save_input(paths: &ChallengePaths, coordinate: Coordinate, input: &str) -> Result<PathBuf> {
    let path = day_file(paths, coordinate, DEFAULT_INPUT_FILE)?;
    ensure_file_exists(&path)?;
    fs::write(&path, input).map_err(|e| AdventError::io(&path, e))?;
    Ok(path)
}

fn day_file(paths: &ChallengePaths, coordinate: Coordinate, name: &str) -> Result<PathBuf> {
    let dir = paths.day_dir(coordinate.year, coordinate.day);
    fs::create_dir_all(&dir).map_err(|e| AdventError::io(&dir, e))?;
    Ok(dir.join(name))
}

/// Creates an empty placeholder when `path` is missing; never truncates.
fn ensure_file_exists(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }

    log::info!("File {} not found. Creating it.", path.display());
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(drop)
        .map_err(|e| AdventError::io(path, e))
}
