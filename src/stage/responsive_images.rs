use super::*;

/// Adds the configured responsive class to every image in `#content`.
pub struct ResponsiveImagesStage;

impl Stage for ResponsiveImagesStage {
  fn name(&self) -> &'static str {
    "responsive-images"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let class = context.options().image_class.trim();

    if class.is_empty() {
      return Ok(());
    }

    context
      .document()
      .select(&format!("#{CONTENT_ID} img"))
      .add_class(class);

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::stage::tests::*};

  fn classes(html: &dom_query::Document) -> Vec<String> {
    html
      .select("img")
      .iter()
      .map(|image| image.attr("class").unwrap_or_default().to_string())
      .collect()
  }

  #[test]
  fn keeps_existing_classes() {
    let html = template_with_content(
      r#"<p><img src="a.png"><img src="b.png" class="rounded"></p>"#,
    );

    run_stage(
      &mut ResponsiveImagesStage,
      &html,
      &FrontMatter::default(),
      &ViewerOptions::default(),
    )
    .unwrap();

    let classes = classes(&html);

    assert_eq!(classes[0], "img-fluid");
    assert!(classes[1].split_whitespace().any(|class| class == "rounded"));
    assert!(classes[1].split_whitespace().any(|class| class == "img-fluid"));
  }

  #[test]
  fn running_twice_adds_class_once() {
    let html = template_with_content(r#"<img src="a.png">"#);

    for _ in 0..2 {
      run_stage(
        &mut ResponsiveImagesStage,
        &html,
        &FrontMatter::default(),
        &ViewerOptions::default(),
      )
      .unwrap();
    }

    assert_eq!(classes(&html), vec!["img-fluid"]);
  }

  #[test]
  fn images_outside_content_are_untouched() {
    let html = template_with_content("");

    html.select("body").append_html(r#"<img id="logo" src="logo.png">"#);

    run_stage(
      &mut ResponsiveImagesStage,
      &html,
      &FrontMatter::default(),
      &ViewerOptions::builder().image_class("w-100").build(),
    )
    .unwrap();

    assert!(html.select("#logo").attr("class").is_none());
  }
}
