use super::*;

mod embed_videos;
mod highlight_code;
mod inject_metadata;
mod render_markdown;
mod responsive_images;
mod show_error;
mod table_of_contents;

pub use {
  embed_videos::EmbedVideosStage, highlight_code::HighlightCodeStage,
  inject_metadata::InjectMetadataStage, render_markdown::RenderMarkdownStage,
  responsive_images::ResponsiveImagesStage, show_error::ShowErrorStage,
  table_of_contents::TableOfContentsStage,
};

pub(crate) trait Stage {
  fn name(&self) -> &'static str;

  fn run(&mut self, context: &mut Context<'_>) -> Result;
}
