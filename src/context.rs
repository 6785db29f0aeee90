use super::*;

pub(crate) struct Context<'a> {
  front_matter: &'a FrontMatter,
  html: &'a dom_query::Document,
  options: &'a ViewerOptions,
  page_url: &'a Url,
  toc: Vec<TocEntry>,
}

impl<'a> Context<'a> {
  pub(crate) fn document(&self) -> Document<'a> {
    Document::new(self.html)
  }

  pub(crate) fn front_matter(&self) -> &'a FrontMatter {
    self.front_matter
  }

  pub(crate) fn new(
    html: &'a dom_query::Document,
    front_matter: &'a FrontMatter,
    page_url: &'a Url,
    options: &'a ViewerOptions,
  ) -> Self {
    Self {
      front_matter,
      html,
      options,
      page_url,
      toc: Vec::new(),
    }
  }

  pub(crate) fn options(&self) -> &'a ViewerOptions {
    self.options
  }

  pub(crate) fn page_url(&self) -> &'a Url {
    self.page_url
  }

  pub(crate) fn set_toc(&mut self, toc: Vec<TocEntry>) {
    self.toc = toc;
  }

  pub(crate) fn toc(&mut self) -> Vec<TocEntry> {
    mem::take(&mut self.toc)
  }
}
