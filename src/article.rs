use super::*;

/// Summary of a loaded page, suitable for serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
  pub title: Option<String>,
  pub date: Option<String>,
  pub front_matter: FrontMatter,
  pub content: String,
  pub toc: Vec<TocEntry>,
  pub error: Option<String>,
}
