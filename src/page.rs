use super::*;

/// One entry of a generated table of contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
  pub id: String,
  pub level: u8,
  pub text: String,
}

impl TocEntry {
  pub(crate) fn link_markup(&self) -> String {
    format!(
      r##"<a href="#{}" class="toc-level-{}">{}</a>"##,
      escape_html(&self.id),
      self.level,
      escape_html(&self.text)
    )
  }
}

/// The viewer page after a load: the template with the article rendered
/// into it, or with the load error shown in place of the article.
pub struct Page {
  error: Option<Error>,
  pub(crate) front_matter: FrontMatter,
  pub(crate) html: dom_query::Document,
  options: ViewerOptions,
  pub(crate) page_url: Url,
  toc: Vec<TocEntry>,
}

impl Page {
  /// The rendered children of `#content`.
  #[must_use]
  pub fn content_html(&self) -> Option<String> {
    self
      .document()
      .element_by_id(CONTENT_ID)
      .map(|content| content.inner_html().to_string())
  }

  fn document(&self) -> Document<'_> {
    Document::new(&self.html)
  }

  /// The failure that stopped the load, if any.
  #[must_use]
  pub fn error(&self) -> Option<&Error> {
    self.error.as_ref()
  }

  #[must_use]
  pub fn front_matter(&self) -> &FrontMatter {
    &self.front_matter
  }

  /// Rebuilds the table of contents from the current headings, discarding
  /// previously generated entries. Without an `#article-toc` element the
  /// headings still receive ids but no links are written.
  pub fn generate_toc(&mut self) -> &[TocEntry] {
    self.toc = TableOfContentsStage::generate(
      &Document::new(&self.html),
      &self.options.toc_levels,
    );

    &self.toc
  }

  /// Serializes the whole page.
  #[must_use]
  pub fn html(&self) -> String {
    self.html.html().to_string()
  }

  pub(crate) fn new(
    html: dom_query::Document,
    front_matter: FrontMatter,
    page_url: Url,
    options: ViewerOptions,
  ) -> Self {
    Self {
      error: None,
      front_matter,
      html,
      options,
      page_url,
      toc: Vec::new(),
    }
  }

  #[must_use]
  pub fn page_url(&self) -> &Url {
    &self.page_url
  }

  /// The document `<title>` text.
  #[must_use]
  pub fn title(&self) -> Option<String> {
    self.document().title()
  }

  #[must_use]
  pub fn to_article(&self) -> Article {
    Article {
      content: self.content_html().unwrap_or_default(),
      date: self.front_matter.date().map(str::to_string),
      error: self.error.as_ref().map(ToString::to_string),
      front_matter: self.front_matter.clone(),
      title: self.front_matter.title().map(str::to_string),
      toc: self.toc.clone(),
    }
  }

  #[must_use]
  pub fn toc(&self) -> &[TocEntry] {
    &self.toc
  }

  pub(crate) fn with_error(self, error: Error) -> Self {
    Self {
      error: Some(error),
      ..self
    }
  }

  pub(crate) fn with_toc(self, toc: Vec<TocEntry>) -> Self {
    Self { toc, ..self }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, pretty_assertions::assert_eq};

  #[test]
  fn toc_link_markup_escapes_text() {
    let entry = TocEntry {
      id: "a\"b".into(),
      level: 2,
      text: "Fish & <Chips>".into(),
    };

    assert_eq!(
      entry.link_markup(),
      r##"<a href="#a&quot;b" class="toc-level-2">Fish &amp; &lt;Chips&gt;</a>"##
    );
  }
}
