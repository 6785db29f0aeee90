use super::*;

/// Writes the front matter title and date into their display elements.
///
/// Targets missing from the page are skipped, and so are empty values.
pub struct InjectMetadataStage;

impl Stage for InjectMetadataStage {
  fn name(&self) -> &'static str {
    "inject-metadata"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let front_matter = context.front_matter();

    let document = context.document();

    if let Some(title) = front_matter.title() {
      if let Some(element) = document.element_by_id(TITLE_ID) {
        Document::set_text(&element, title);
      }

      document.set_title(title);
    }

    if let Some(date) = front_matter.date()
      && let Some(element) = document.element_by_id(DATE_ID)
    {
      Document::set_text(&element, date);
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::stage::tests::*, pretty_assertions::assert_eq};

  fn inject(
    html: &dom_query::Document,
    front_matter: &FrontMatter,
  ) -> dom_query::Document {
    run_stage(
      &mut InjectMetadataStage,
      html,
      front_matter,
      &ViewerOptions::default(),
    )
    .unwrap();

    dom_query::Document::from(html.html().to_string())
  }

  #[test]
  fn writes_title_and_date() {
    let html = inject(
      &template_with_content(""),
      &FrontMatter::parse("title: Ownership & <Borrowing>\ndate: 2024-05-01"),
    );

    assert_eq!(
      html.select("#article-title").text().to_string(),
      "Ownership & <Borrowing>"
    );
    assert_eq!(html.select("#article-date").text().to_string(), "2024-05-01");
    assert_eq!(
      html.select("title").text().to_string(),
      "Ownership & <Borrowing>"
    );
  }

  #[test]
  fn missing_keys_leave_targets_untouched() {
    let page = template_with_content("");

    page.select("#article-date").set_html("unchanged");

    let html = inject(&page, &FrontMatter::parse("author: someone"));

    assert_eq!(html.select("title").text().to_string(), "Article");
    assert_eq!(html.select("#article-title").text().to_string(), "");
    assert_eq!(html.select("#article-date").text().to_string(), "unchanged");
  }

  #[test]
  fn missing_elements_are_skipped() {
    let page = dom_query::Document::from(
      "<html><head><title>Old</title></head><body></body></html>",
    );

    let html = inject(&page, &FrontMatter::parse("title: New\ndate: today"));

    assert_eq!(html.select("title").text().to_string(), "New");
    assert_eq!(html.select("#article-date").length(), 0);
  }
}
