use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::models::QuestionRecord;

pub const DEFAULT_SOURCE: &str = "data.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Transport failure before any response arrived.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status { status: u16 },

    #[error("Failed to parse questions: {0}")]
    Parse(#[from] serde_json::Error),

    /// The load task ended without producing a result.
    #[error("Load aborted before the questions arrived")]
    Aborted,
}

/// Where the question set is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizSource {
    Path(PathBuf),
    Url(String),
}

impl QuizSource {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            QuizSource::Url(source.to_string())
        } else {
            QuizSource::Path(PathBuf::from(source))
        }
    }
}

impl Default for QuizSource {
    fn default() -> Self {
        QuizSource::Path(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl fmt::Display for QuizSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizSource::Path(path) => write!(f, "{}", path.display()),
            QuizSource::Url(url) => f.write_str(url),
        }
    }
}

/// Fetches the full ordered question list. No retry is attempted.
pub async fn load_questions(source: &QuizSource) -> Result<Vec<QuestionRecord>, LoadError> {
    match source {
        QuizSource::Path(path) => {
            debug!("Loading questions from {}", source);
            parse_questions(&read_file(path).await?)
        }
        QuizSource::Url(_) => load_questions_with(&reqwest::Client::new(), source).await,
    }
}

/// Same as [`load_questions`], fetching URLs through `client`.
pub async fn load_questions_with(
    client: &reqwest::Client,
    source: &QuizSource,
) -> Result<Vec<QuestionRecord>, LoadError> {
    debug!("Loading questions from {}", source);

    let body = match source {
        QuizSource::Path(path) => read_file(path).await?,
        QuizSource::Url(url) => {
            let response = client.get(url).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    status: status.as_u16(),
                });
            }
            response.text().await?
        }
    };

    parse_questions(&body)
}

async fn read_file(path: &Path) -> Result<String, LoadError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })
}

/// Parses a JSON array of question records. An empty array is a valid,
/// empty dataset.
pub fn parse_questions(json: &str) -> Result<Vec<QuestionRecord>, LoadError> {
    Ok(serde_json::from_str(json)?)
}
