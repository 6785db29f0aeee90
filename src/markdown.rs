use {
  super::*,
  pulldown_cmark::{
    CowStr, Event, LinkType, Options, Parser, Tag, TagEnd, TextMergeStream,
    html,
  },
  std::collections::VecDeque,
};

/// Renders Markdown to HTML.
///
/// Tables, strikethrough, task lists and footnotes are enabled, raw HTML is
/// passed through untouched, and bare `http(s)://` URLs in running text
/// become links.
#[must_use]
pub fn render_markdown(markdown: &str) -> String {
  let mut options = Options::empty();
  options.insert(Options::ENABLE_TABLES);
  options.insert(Options::ENABLE_STRIKETHROUGH);
  options.insert(Options::ENABLE_TASKLISTS);
  options.insert(Options::ENABLE_FOOTNOTES);

  let parser =
    Autolinks::new(TextMergeStream::new(Parser::new_ext(markdown, options)));

  let mut output = String::with_capacity(markdown.len() * 3 / 2);
  html::push_html(&mut output, parser);

  output
}

/// Turns URLs found in text events into link events, leaving text inside
/// links, raw `<a>` tags, images and code blocks alone.
struct Autolinks<'a, I> {
  html_link_depth: usize,
  in_code_block: bool,
  inner: I,
  link_depth: usize,
  pending: VecDeque<Event<'a>>,
}

impl<'a, I> Autolinks<'a, I>
where
  I: Iterator<Item = Event<'a>>,
{
  fn new(inner: I) -> Self {
    Self {
      html_link_depth: 0,
      in_code_block: false,
      inner,
      link_depth: 0,
      pending: VecDeque::new(),
    }
  }

  fn split_links(&mut self, text: &str) {
    let mut last = 0;

    for found in re::BARE_URL.find_iter(text) {
      if found.start() > last {
        self.pending.push_back(Event::Text(
          text[last..found.start()].to_string().into(),
        ));
      }

      let url = found.as_str().to_string();

      self.pending.push_back(Event::Start(Tag::Link {
        link_type: LinkType::Autolink,
        dest_url: url.clone().into(),
        title: CowStr::Borrowed(""),
        id: CowStr::Borrowed(""),
      }));
      self.pending.push_back(Event::Text(url.into()));
      self.pending.push_back(Event::End(TagEnd::Link));

      last = found.end();
    }

    if last < text.len() {
      self
        .pending
        .push_back(Event::Text(text[last..].to_string().into()));
    }
  }
}

impl<'a, I> Iterator for Autolinks<'a, I>
where
  I: Iterator<Item = Event<'a>>,
{
  type Item = Event<'a>;

  fn next(&mut self) -> Option<Self::Item> {
    if let Some(event) = self.pending.pop_front() {
      return Some(event);
    }

    let event = self.inner.next()?;

    match &event {
      Event::Start(Tag::Link { .. } | Tag::Image { .. }) => {
        self.link_depth += 1;
      }
      Event::End(TagEnd::Link | TagEnd::Image) => {
        self.link_depth = self.link_depth.saturating_sub(1);
      }
      Event::Start(Tag::CodeBlock(_)) => self.in_code_block = true,
      Event::End(TagEnd::CodeBlock) => self.in_code_block = false,
      Event::InlineHtml(html) if re::HTML_ANCHOR_OPEN.is_match(html) => {
        self.html_link_depth += 1;
      }
      Event::InlineHtml(html) if re::HTML_ANCHOR_CLOSE.is_match(html) => {
        self.html_link_depth = self.html_link_depth.saturating_sub(1);
      }
      Event::End(
        TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::TableCell,
      ) => self.html_link_depth = 0,
      Event::Text(text)
        if self.link_depth == 0
          && self.html_link_depth == 0
          && !self.in_code_block
          && re::BARE_URL.is_match(text) =>
      {
        self.split_links(text);
        return self.pending.pop_front();
      }
      _ => {}
    }

    Some(event)
  }
}
