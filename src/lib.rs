use {
  context::Context,
  document::{Document, escape_html},
  dom_query::Selection,
  pipeline::Pipeline,
  regex::Regex,
  serde::Serialize,
  stage::{
    EmbedVideosStage, HighlightCodeStage, InjectMetadataStage,
    RenderMarkdownStage, ResponsiveImagesStage, ShowErrorStage, Stage,
    TableOfContentsStage,
  },
  std::{collections::BTreeMap, io, mem, path::PathBuf, sync::LazyLock},
  template::{CONTENT_ID, DATE_ID, DEFAULT_TEMPLATE, TITLE_ID, TOC_ID},
  tracing::{debug, info, warn},
  url::Url,
};

pub use crate::{
  article::Article,
  error::Error,
  fetcher::Fetcher,
  front_matter::FrontMatter,
  locator::ArticleLocator,
  markdown::render_markdown,
  options::{ViewerOptions, ViewerOptionsBuilder},
  page::{Page, TocEntry},
  viewer::Viewer,
};

mod article;
mod context;
mod document;
mod error;
mod fetcher;
mod front_matter;
mod locator;
mod markdown;
mod options;
mod page;
mod pipeline;
mod re;
mod stage;
mod template;
mod viewer;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
