use super::*;

#[derive(Parser)]
#[command(name = "article-viewer")]
#[command(
  about = "Render a Markdown article into its viewer page",
  long_about = None
)]
pub(crate) struct Arguments {
  #[arg(
    long,
    env = "ARTICLE_VIEWER_ARTICLE",
    help = "Article file name, overriding the page's `article` query parameter"
  )]
  article: Option<String>,
  #[arg(
    long,
    env = "ARTICLE_VIEWER_ARTICLES_DIR",
    default_value = "articles",
    help = "Directory holding articles, relative to the page"
  )]
  articles_dir: String,
  #[arg(
    long,
    env = "ARTICLE_VIEWER_DEFAULT_ARTICLE",
    default_value = "article1.md",
    help = "Article loaded when the page names none"
  )]
  default_article: String,
  #[arg(
    long,
    env = "ARTICLE_VIEWER_IMAGE_CLASS",
    default_value = "img-fluid",
    help = "Class added to every image in the article"
  )]
  image_class: String,
  #[arg(long, help = "Print a JSON summary instead of the page HTML")]
  json: bool,
  #[arg(long, help = "Leave code blocks unhighlighted")]
  no_highlight: bool,
  #[arg(short, long, value_name = "FILE", help = "Write output to FILE")]
  output: Option<PathBuf>,
  #[arg(
    value_name = "PAGE",
    help = "URL or path of the viewer page, e.g. `site/index.html?article=intro.md`"
  )]
  page: String,
  #[arg(short, long, conflicts_with = "verbose", help = "Only log warnings")]
  quiet: bool,
  #[arg(
    long,
    env = "ARTICLE_VIEWER_TEMPLATE",
    value_name = "FILE",
    help = "HTML page template to render into"
  )]
  template: Option<PathBuf>,
  #[arg(short, long, help = "Log debug output")]
  verbose: bool,
}

impl Arguments {
  fn init_logging(&self) -> Result {
    let filter = if std::env::var("RUST_LOG").is_ok() {
      EnvFilter::from_default_env()
    } else if self.quiet {
      EnvFilter::new("warn")
    } else if self.verbose {
      EnvFilter::new("debug")
    } else {
      EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
      .with_env_filter(filter)
      .with_writer(std::io::stderr)
      .try_init()
      .map_err(|error| anyhow!("failed to install logger: {error}"))
  }

  fn options(&self) -> Result<ViewerOptions> {
    let mut builder = ViewerOptions::builder()
      .articles_dir(&self.articles_dir)
      .default_article(&self.default_article)
      .highlight(!self.no_highlight)
      .image_class(&self.image_class);

    if let Some(path) = &self.template {
      let template = fs::read_to_string(path).with_context(|| {
        format!("failed to read template from `{}`", path.display())
      })?;

      builder = builder.template(template);
    }

    Ok(builder.build())
  }

  /// Accepts a URL or a filesystem path; a local page may carry its query
  /// string after the path.
  fn page_url(&self) -> Result<Url> {
    let mut url = match Url::parse(&self.page) {
      Ok(url) => url,
      Err(_) => {
        let (path, query) = match self.page.split_once('?') {
          Some((path, query)) => (path, Some(query)),
          None => (self.page.as_str(), None),
        };

        let absolute = path::absolute(path).with_context(|| {
          format!("failed to resolve page path `{path}`")
        })?;

        let mut url = if absolute.is_dir() {
          Url::from_directory_path(&absolute)
        } else {
          Url::from_file_path(&absolute)
        }
        .map_err(|()| anyhow!("invalid page path `{}`", absolute.display()))?;

        url.set_query(query);

        url
      }
    };

    if let Some(article) = &self.article {
      let pairs = url
        .query_pairs()
        .filter(|(key, _)| key != "article")
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect::<Vec<(String, String)>>();

      url.set_query(None);

      url
        .query_pairs_mut()
        .extend_pairs(pairs)
        .append_pair("article", article);
    }

    Ok(url)
  }

  pub(crate) async fn run(self) -> Result {
    if let Err(error) = self.init_logging() {
      eprintln!("warning: {error}");
    }

    let page_url = self.page_url()?;

    let viewer =
      Viewer::new(self.options()?).context("failed to create viewer")?;

    let page = viewer.load(&page_url).await;

    let output = if self.json {
      serde_json::to_string_pretty(&page.to_article())
        .context("failed to serialize article")?
    } else {
      page.html()
    };

    match &self.output {
      Some(path) => fs::write(path, output).with_context(|| {
        format!("failed to write output to `{}`", path.display())
      })?,
      None => println!("{output}"),
    }

    if let Some(error) = page.error() {
      bail!("failed to load article: {error}");
    }

    Ok(())
  }
}
