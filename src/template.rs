pub(crate) const CONTENT_ID: &str = "content";
pub(crate) const DATE_ID: &str = "article-date";
pub(crate) const TITLE_ID: &str = "article-title";
pub(crate) const TOC_ID: &str = "article-toc";

/// Page used when no template is configured. Custom templates must provide
/// the same element ids to receive the article.
pub(crate) const DEFAULT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Article</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css">
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/highlight.js@11.9.0/styles/github.min.css">
  </head>
  <body>
    <div class="container my-5">
      <div class="row">
        <aside class="col-lg-3 order-lg-2 mb-4">
          <nav id="article-toc" class="nav flex-column"></nav>
        </aside>
        <main class="col-lg-9 order-lg-1">
          <h1 id="article-title"></h1>
          <p id="article-date" class="text-muted"></p>
          <article id="content"></article>
        </main>
      </div>
    </div>
  </body>
</html>
"#;
