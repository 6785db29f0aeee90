use super::*;

const ALLOW: &str = "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share";

/// Replaces links to YouTube videos with an embedded player.
pub struct EmbedVideosStage;

impl Stage for EmbedVideosStage {
  fn name(&self) -> &'static str {
    "embed-videos"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    let page_url = context.page_url();

    for link in context
      .document()
      .select(&format!("#{CONTENT_ID} a"))
      .iter()
    {
      let Some(href) = link.attr("href") else {
        continue;
      };

      let Some(video_id) = Self::video_id(&Self::resolve_href(page_url, &href))
      else {
        continue;
      };

      debug!(%video_id, "embedding video");

      link.replace_with_html(Self::embed_markup(&video_id));
    }

    Ok(())
  }
}

impl EmbedVideosStage {
  fn embed_markup(video_id: &str) -> String {
    format!(
      concat!(
        r#"<div class="ratio ratio-16x9 mb-4">"#,
        r#"<iframe src="https://www.youtube.com/embed/{}" allow="{}" "#,
        r#"referrerpolicy="strict-origin-when-cross-origin" allowfullscreen="" "#,
        r#"title="YouTube video player"></iframe></div>"#
      ),
      video_id, ALLOW
    )
  }

  fn resolve_href(base_url: &Url, href: &str) -> String {
    match Url::parse(href) {
      Ok(url) => url.to_string(),
      Err(_) => base_url
        .join(href)
        .map_or_else(|_| href.to_string(), |url| url.to_string()),
    }
  }

  fn video_id(url: &str) -> Option<String> {
    re::YOUTUBE_LINK
      .captures(url)
      .map(|captures| captures[1].to_string())
  }
}
