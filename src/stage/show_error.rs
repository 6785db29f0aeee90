use super::*;

/// Replaces the children of `#content` with a visible load error message.
pub struct ShowErrorStage<'a> {
  error: &'a Error,
}

impl Stage for ShowErrorStage<'_> {
  fn name(&self) -> &'static str {
    "show-error"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let content = context
      .document()
      .element_by_id(CONTENT_ID)
      .ok_or(Error::MissingElement { id: CONTENT_ID })?;

    content.set_html(format!(
      r#"<p style="color: red;">Load error: {}</p>"#,
      escape_html(&self.error.to_string())
    ));

    Ok(())
  }
}

impl<'a> ShowErrorStage<'a> {
  pub fn new(error: &'a Error) -> Self {
    Self { error }
  }
}
