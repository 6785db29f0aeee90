use super::*;

pub(crate) struct Pipeline<'a> {
  context: Context<'a>,
  stages: Vec<Box<dyn Stage + 'a>>,
}

impl<'a> Pipeline<'a> {
  fn add_stage(&mut self, stage: Box<dyn Stage + 'a>) {
    self.stages.push(stage);
  }

  pub(crate) fn new(context: Context<'a>) -> Self {
    Self {
      context,
      stages: Vec::new(),
    }
  }

  /// Runs every stage in order, stopping at the first failure.
  pub(crate) fn run(mut self) -> Result<Context<'a>> {
    for stage in &mut self.stages {
      debug!(stage = stage.name(), "running stage");
      stage.run(&mut self.context)?;
    }

    Ok(self.context)
  }

  pub(crate) fn with_default_stages(
    context: Context<'a>,
    markdown: &'a str,
  ) -> Self {
    let highlight = context.options().highlight;

    let mut pipeline = Self::new(context);

    pipeline.add_stage(Box::new(RenderMarkdownStage::new(markdown)));
    pipeline.add_stage(Box::new(ResponsiveImagesStage));
    pipeline.add_stage(Box::new(EmbedVideosStage));
    pipeline.add_stage(Box::new(InjectMetadataStage));
    pipeline.add_stage(Box::new(TableOfContentsStage));

    if highlight {
      pipeline.add_stage(Box::new(HighlightCodeStage));
    }

    pipeline
  }
}
