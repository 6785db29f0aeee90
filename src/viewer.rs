use super::*;

/// Loads articles into the viewer page.
#[derive(Debug, Clone)]
pub struct Viewer {
  fetcher: Fetcher,
  options: ViewerOptions,
}

impl Viewer {
  async fn fetch(&self, page_url: &Url) -> Result<String> {
    let locator = ArticleLocator::new(page_url, &self.options)?;

    info!(
      article = locator.article(),
      url = %locator.url(),
      "loading article"
    );

    self.fetcher.fetch_text(locator.url()).await
  }

  /// Fetches the article selected by `page_url` and renders it.
  ///
  /// Failures never escape: the returned page shows the error in place of
  /// the article and exposes it through [`Page::error`].
  pub async fn load(&self, page_url: &Url) -> Page {
    match self.fetch(page_url).await {
      Ok(text) => self.render(page_url, &text),
      Err(error) => self.render_error(page_url, error),
    }
  }

  pub fn new(options: ViewerOptions) -> Result<Self> {
    Ok(Self {
      fetcher: Fetcher::new()?,
      options,
    })
  }

  #[must_use]
  pub fn options(&self) -> &ViewerOptions {
    &self.options
  }

  /// Renders already retrieved article text into a fresh page.
  #[must_use]
  pub fn render(&self, page_url: &Url, text: &str) -> Page {
    let html = dom_query::Document::from(self.options.template());

    let (front_matter, body) = FrontMatter::split(text);

    let context = Context::new(&html, &front_matter, page_url, &self.options);

    match Pipeline::with_default_stages(context, body).run() {
      Ok(mut context) => {
        let toc = context.toc();

        debug!(headings = toc.len(), "article rendered");

        Page::new(
          html,
          front_matter,
          page_url.clone(),
          self.options.clone(),
        )
        .with_toc(toc)
      }
      Err(error) => {
        let page = Page::new(
          html,
          front_matter,
          page_url.clone(),
          self.options.clone(),
        );

        self.show_error(page, error)
      }
    }
  }

  fn render_error(&self, page_url: &Url, error: Error) -> Page {
    let page = Page::new(
      dom_query::Document::from(self.options.template()),
      FrontMatter::default(),
      page_url.clone(),
      self.options.clone(),
    );

    self.show_error(page, error)
  }

  fn show_error(&self, page: Page, error: Error) -> Page {
    warn!(%error, "failed to load article");

    let mut context = Context::new(
      &page.html,
      &page.front_matter,
      &page.page_url,
      &self.options,
    );

    if let Err(display_error) =
      ShowErrorStage::new(&error).run(&mut context)
    {
      warn!(error = %display_error, "could not display load error");
    }

    page.with_error(error)
  }
}
