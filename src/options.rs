use super::*;

#[derive(Debug, Clone)]
pub struct ViewerOptions {
  pub articles_dir: String,
  pub default_article: String,
  pub highlight: bool,
  pub image_class: String,
  pub template: Option<String>,
  pub toc_levels: Vec<u8>,
}

impl Default for ViewerOptions {
  fn default() -> Self {
    Self {
      articles_dir: "articles".to_string(),
      default_article: "article1.md".to_string(),
      highlight: true,
      image_class: "img-fluid".to_string(),
      template: None,
      toc_levels: vec![1, 2],
    }
  }
}

impl ViewerOptions {
  #[must_use]
  pub fn builder() -> ViewerOptionsBuilder {
    ViewerOptionsBuilder::default()
  }

  pub(crate) fn template(&self) -> &str {
    self.template.as_deref().unwrap_or(DEFAULT_TEMPLATE)
  }
}

#[derive(Default)]
pub struct ViewerOptionsBuilder {
  inner: ViewerOptions,
}

impl ViewerOptionsBuilder {
  #[must_use]
  pub fn articles_dir(self, articles_dir: impl Into<String>) -> Self {
    Self {
      inner: ViewerOptions {
        articles_dir: articles_dir.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn build(self) -> ViewerOptions {
    self.inner
  }

  #[must_use]
  pub fn default_article(self, default_article: impl Into<String>) -> Self {
    Self {
      inner: ViewerOptions {
        default_article: default_article.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn highlight(self, highlight: bool) -> Self {
    Self {
      inner: ViewerOptions {
        highlight,
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn image_class(self, image_class: impl Into<String>) -> Self {
    Self {
      inner: ViewerOptions {
        image_class: image_class.into(),
        ..self.inner
      },
    }
  }

  #[must_use]
  pub fn template(self, template: impl Into<String>) -> Self {
    Self {
      inner: ViewerOptions {
        template: Some(template.into()),
        ..self.inner
      },
    }
  }

  /// Heading levels collected into the table of contents. Levels outside
  /// `1..=6` are ignored.
  #[must_use]
  pub fn toc_levels<I>(self, levels: I) -> Self
  where
    I: IntoIterator<Item = u8>,
  {
    Self {
      inner: ViewerOptions {
        toc_levels: levels.into_iter().collect(),
        ..self.inner
      },
    }
  }
}
