use {
  anyhow::{Context, anyhow, bail},
  arguments::Arguments,
  article_viewer::{Viewer, ViewerOptions},
  clap::Parser,
  std::{
    fs,
    path::{self, PathBuf},
    process,
  },
  tracing_subscriber::EnvFilter,
  url::Url,
};

mod arguments;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

#[tokio::main]
async fn main() {
  if let Err(error) = Arguments::parse().run().await {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
