use super::*;

/// Builds a flat table of contents in `#article-toc` from the headings of
/// `#content`.
///
/// Headings without an id get one derived from their text. Two headings
/// with the same text end up with the same id, and only the first of them
/// is reachable through its anchor.
///
/// A page without `#article-toc` fails the load. [`Page::generate_toc`]
/// only assigns heading ids in that case.
pub struct TableOfContentsStage;

impl Stage for TableOfContentsStage {
  fn name(&self) -> &'static str {
    "table-of-contents"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    if context.document().element_by_id(TOC_ID).is_none() {
      return Err(Error::MissingElement { id: TOC_ID });
    }

    let toc =
      Self::generate(&context.document(), &context.options().toc_levels);

    context.set_toc(toc);

    Ok(())
  }
}

impl TableOfContentsStage {
  pub(crate) fn generate(
    document: &Document<'_>,
    levels: &[u8],
  ) -> Vec<TocEntry> {
    let container = document.element_by_id(TOC_ID);

    if let Some(container) = &container {
      container.set_html("");
    } else {
      debug!("page has no table of contents container");
    }

    let selector = levels
      .iter()
      .filter(|level| (1..=6).contains(*level))
      .map(|level| format!("#{CONTENT_ID} h{level}"))
      .collect::<Vec<String>>()
      .join(", ");

    if selector.is_empty() {
      return Vec::new();
    }

    document
      .select(&selector)
      .iter()
      .map(|heading| {
        let text = heading.text().to_string();

        let id = match heading.attr("id") {
          Some(id) if !id.is_empty() => id.to_string(),
          _ => {
            let id = Self::heading_id(&text);
            heading.set_attr("id", &id);
            id
          }
        };

        let entry = TocEntry {
          level: Self::heading_level(&heading),
          id,
          text,
        };

        if let Some(container) = &container {
          container.append_html(entry.link_markup());
        }

        entry
      })
      .collect()
  }

  fn heading_id(text: &str) -> String {
    re::WHITESPACE_RUNS.replace_all(text, "-").to_lowercase()
  }

  fn heading_level(heading: &Selection<'_>) -> u8 {
    heading
      .nodes()
      .first()
      .and_then(|node| node.node_name())
      .and_then(|name| name.chars().nth(1)?.to_digit(10))
      .and_then(|level| u8::try_from(level).ok())
      .filter(|level| *level != 0)
      .unwrap_or(1)
  }
}
