use {
  super::*,
  syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::SyntaxSet,
    util::LinesWithEndings,
  },
};

static SYNTAX_SET: LazyLock<SyntaxSet> =
  LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Highlights every `pre code` block on the page with class based spans.
///
/// Blocks already marked with `data-highlighted` are left alone.
pub struct HighlightCodeStage;

impl Stage for HighlightCodeStage {
  fn name(&self) -> &'static str {
    "highlight-code"
  }

  fn run(&mut self, context: &mut Context<'_>) -> Result {
    for block in context.document().select("pre code").iter() {
      if block.attr("data-highlighted").is_some() {
        continue;
      }

      let language = Self::language(&block);

      let highlighted =
        Self::highlight(&block.text(), language.as_deref())?;

      block.set_html(highlighted);
      block.add_class("hljs");
      block.set_attr("data-highlighted", "yes");
    }

    Ok(())
  }
}

impl HighlightCodeStage {
  fn highlight(code: &str, language: Option<&str>) -> Result<String> {
    let syntax = language
      .and_then(|token| SYNTAX_SET.find_syntax_by_token(token))
      .or_else(|| SYNTAX_SET.find_syntax_by_first_line(code))
      .unwrap_or_else(|| SYNTAX_SET.find_syntax_plain_text());

    let mut generator = ClassedHTMLGenerator::new_with_class_style(
      syntax,
      &SYNTAX_SET,
      ClassStyle::SpacedPrefixed { prefix: "hljs-" },
    );

    for line in LinesWithEndings::from(code) {
      generator.parse_html_for_line_which_includes_newline(line)?;
    }

    Ok(generator.finalize())
  }

  fn language(block: &Selection<'_>) -> Option<String> {
    let classes = block.attr("class")?;

    classes
      .split_whitespace()
      .find_map(|class| {
        class
          .strip_prefix("language-")
          .or_else(|| class.strip_prefix("lang-"))
      })
      .map(str::to_string)
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crate::stage::tests::*};

  fn highlight(content: &str) -> dom_query::Document {
    let html = template_with_content(content);

    run_stage(
      &mut HighlightCodeStage,
      &html,
      &FrontMatter::default(),
      &ViewerOptions::default(),
    )
    .unwrap();

    html
  }

  #[test]
  fn marks_and_highlights_code_blocks() {
    let html = highlight(
      "<pre><code class=\"language-rust\">fn main() {}\n</code></pre>",
    );

    let code = html.select("pre code");

    assert!(code.has_class("hljs"));
    assert!(code.has_class("language-rust"));
    assert_eq!(code.attr("data-highlighted").as_deref(), Some("yes"));
    assert!(code.select("span").length() > 0);
    assert_eq!(code.text().to_string(), "fn main() {}\n");
  }

  #[test]
  fn unknown_language_falls_back_to_plain_text() {
    let html = highlight(
      "<pre><code class=\"language-nope\">a &lt; b &amp;&amp; c\n</code></pre>",
    );

    let code = html.select("pre code");

    assert!(code.has_class("hljs"));
    assert_eq!(code.text().to_string(), "a < b && c\n");
  }

  #[test]
  fn unlabelled_blocks_use_first_line_syntax() {
    let html = highlight("<pre><code>#!/bin/bash\necho hi\n</code></pre>");

    let code = html.select("pre code");

    assert!(code.has_class("hljs"));
    assert!(code.select("span.hljs-source.hljs-shell").exists());
    assert_eq!(code.text().to_string(), "#!/bin/bash\necho hi\n");
  }

  #[test]
  fn unlabelled_blocks_without_hint_are_plain_text() {
    let highlighted =
      HighlightCodeStage::highlight("echo hi\n", None).unwrap();

    assert!(!highlighted.contains("hljs-shell"));
    assert!(highlighted.contains("echo hi"));
  }

  #[test]
  fn inline_code_is_not_highlighted() {
    let html = highlight("<p><code>let x = 1;</code></p>");

    assert!(!html.select("p code").has_class("hljs"));
  }

  #[test]
  fn highlighted_blocks_are_skipped() {
    let html = highlight(
      "<pre><code data-highlighted=\"yes\"><b>kept</b></code></pre>",
    );

    assert_eq!(html.select("pre code b").text().to_string(), "kept");
    assert!(!html.select("pre code").has_class("hljs"));
  }

  #[test]
  fn language_reads_either_prefix() {
    let html = template_with_content(
      "<code class=\"x lang-python\"></code><code class=\"plain\"></code>",
    );

    let blocks = html.select("#content code");

    let languages = blocks
      .iter()
      .map(|block| HighlightCodeStage::language(&block))
      .collect::<Vec<_>>();

    assert_eq!(languages, vec![Some("python".to_string()), None]);
  }
}
