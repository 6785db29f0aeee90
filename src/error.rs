use super::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("failed to build http client: {source}")]
  Client { source: reqwest::Error },
  #[error("failed to highlight code block: {source}")]
  Highlight {
    #[from]
    source: syntect::Error,
  },
  #[error("`{url}` does not name a local file")]
  InvalidFilePath { url: Url },
  #[error("invalid article url: {source}")]
  InvalidUrl {
    #[from]
    source: url::ParseError,
  },
  #[error("page template has no `#{id}` element")]
  MissingElement { id: &'static str },
  #[error("failed to read `{}`: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },
  #[error("HTTP error! status: {status}")]
  Status { status: u16 },
  #[error("network error: {source}")]
  Transport { source: reqwest::Error },
  #[error("unsupported url scheme `{scheme}`")]
  UnsupportedScheme { scheme: String },
}
