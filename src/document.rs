use super::*;

pub(crate) struct Document<'a> {
  document: &'a dom_query::Document,
}

impl<'a> Document<'a> {
  pub(crate) fn element_by_id(&self, id: &str) -> Option<Selection<'a>> {
    let selection = self.document.select(&format!("#{id}"));

    selection.exists().then_some(selection)
  }

  pub(crate) fn new(document: &'a dom_query::Document) -> Self {
    Document { document }
  }

  pub(crate) fn select(&self, selector: &str) -> Selection<'a> {
    self.document.select(selector)
  }

  pub(crate) fn set_text(selection: &Selection<'_>, text: &str) {
    selection.set_html(escape_html(text));
  }

  /// Sets the document `<title>`, creating it in `<head>` when missing.
  pub(crate) fn set_title(&self, title: &str) {
    let element = self.select("head title");

    if element.exists() {
      Self::set_text(&element, title);
    } else {
      self
        .select("head")
        .append_html(format!("<title>{}</title>", escape_html(title)));
    }
  }

  pub(crate) fn title(&self) -> Option<String> {
    let element = self.select("head title");

    element.exists().then(|| element.text().to_string())
  }
}

pub(crate) fn escape_html(text: &str) -> String {
  let mut escaped = String::with_capacity(text.len());

  for character in text.chars() {
    match character {
      '&' => escaped.push_str("&amp;"),
      '<' => escaped.push_str("&lt;"),
      '>' => escaped.push_str("&gt;"),
      '"' => escaped.push_str("&quot;"),
      '\'' => escaped.push_str("&#39;"),
      _ => escaped.push(character),
    }
  }

  escaped
}
