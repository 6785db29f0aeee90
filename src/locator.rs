use super::*;

/// Chooses the article file for a page and the URL it is fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLocator {
  article: String,
  url: Url,
}

impl ArticleLocator {
  #[must_use]
  pub fn article(&self) -> &str {
    &self.article
  }

  /// Reads the `article` query parameter of `page_url`, falling back to the
  /// configured default when it is missing or empty, and resolves
  /// `<articles_dir>/<article>` against the page URL.
  pub fn new(page_url: &Url, options: &ViewerOptions) -> Result<Self> {
    let article = page_url
      .query_pairs()
      .find(|(key, _)| key == "article")
      .map(|(_, value)| value.into_owned())
      .filter(|value| !value.is_empty())
      .unwrap_or_else(|| options.default_article.clone());

    let url = page_url.join(&format!(
      "{}/{article}",
      options.articles_dir.trim_end_matches('/')
    ))?;

    Ok(Self { article, url })
  }

  #[must_use]
  pub fn url(&self) -> &Url {
    &self.url
  }
}
