use super::*;

pub(crate) static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r#"https?://[^\s<>"]*[^\s<>"'.,:;!?()\[\]]"#).unwrap()
});

pub(crate) static HTML_ANCHOR_CLOSE: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)\A</a\s*>").unwrap());

pub(crate) static HTML_ANCHOR_OPEN: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(?i)\A<a(?:\s|/?>)").unwrap());

pub(crate) static FRONT_MATTER: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\A---\n((?s:.*?))\n---\n?").unwrap());

pub(crate) static WHITESPACE_RUNS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\s+").unwrap());

pub(crate) static YOUTUBE_LINK: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([a-zA-Z0-9_-]{11})")
    .unwrap()
});
