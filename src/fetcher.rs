use super::*;

/// Retrieves article text over HTTP(S) or from `file://` URLs.
#[derive(Debug, Clone)]
pub struct Fetcher {
  client: reqwest::Client,
}

impl Fetcher {
  /// Decodes fetched bytes as UTF-8, dropping a leading byte order mark and
  /// replacing invalid sequences.
  fn decode(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);

    match text.strip_prefix('\u{feff}') {
      Some(rest) => rest.to_string(),
      None => text.into_owned(),
    }
  }

  /// Fetches the body of `url` as text.
  ///
  /// Non-success HTTP statuses are reported as [`Error::Status`].
  pub async fn fetch_text(&self, url: &Url) -> Result<String> {
    debug!(%url, "fetching article");

    let bytes = match url.scheme() {
      "http" | "https" => self.fetch_remote(url).await?,
      "file" => Self::fetch_local(url).await?,
      scheme => {
        return Err(Error::UnsupportedScheme {
          scheme: scheme.to_string(),
        });
      }
    };

    Ok(Self::decode(&bytes))
  }

  async fn fetch_local(url: &Url) -> Result<Vec<u8>> {
    let path = url
      .to_file_path()
      .map_err(|()| Error::InvalidFilePath { url: url.clone() })?;

    tokio::fs::read(&path)
      .await
      .map_err(|source| Error::Read { path, source })
  }

  async fn fetch_remote(&self, url: &Url) -> Result<Vec<u8>> {
    let response = self
      .client
      .get(url.clone())
      .send()
      .await
      .map_err(|source| Error::Transport { source })?;

    let status = response.status();

    if !status.is_success() {
      return Err(Error::Status {
        status: status.as_u16(),
      });
    }

    response
      .bytes()
      .await
      .map(|bytes| bytes.to_vec())
      .map_err(|source| Error::Transport { source })
  }

  pub fn new() -> Result<Self> {
    let client = reqwest::Client::builder()
      .user_agent(concat!(
        env!("CARGO_PKG_NAME"),
        "/",
        env!("CARGO_PKG_VERSION")
      ))
      .build()
      .map_err(|source| Error::Client { source })?;

    Ok(Self { client })
  }
}
