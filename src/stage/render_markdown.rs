use super::*;

/// Replaces the children of `#content` with the rendered article body.
pub struct RenderMarkdownStage<'a> {
  markdown: &'a str,
}

impl Stage for RenderMarkdownStage<'_> {
  fn name(&self) -> &'static str {
    "render-markdown"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let content = context
      .document()
      .element_by_id(CONTENT_ID)
      .ok_or(Error::MissingElement { id: CONTENT_ID })?;

    content.set_html(render_markdown(self.markdown));

    Ok(())
  }
}

impl<'a> RenderMarkdownStage<'a> {
  pub fn new(markdown: &'a str) -> Self {
    Self { markdown }
  }
}
