use super::*;

/// Key/value metadata read from the `---` delimited header of an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrontMatter {
  entries: BTreeMap<String, String>,
}

impl FrontMatter {
  #[must_use]
  pub fn date(&self) -> Option<&str> {
    self.non_empty("date")
  }

  #[must_use]
  pub fn get(&self, key: &str) -> Option<&str> {
    self.entries.get(key).map(String::as_str)
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
    self
      .entries
      .iter()
      .map(|(key, value)| (key.as_str(), value.as_str()))
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  fn non_empty(&self, key: &str) -> Option<&str> {
    self.get(key).filter(|value| !value.is_empty())
  }

  /// Parses header lines of the form `key: value`.
  ///
  /// Each line is split on its first colon and both halves are trimmed, so
  /// `date: 2024:01:01` keeps `2024:01:01`. Lines without a colon or with
  /// nothing before it are skipped. A repeated key keeps its last value.
  #[must_use]
  pub fn parse(header: &str) -> Self {
    header
      .split('\n')
      .filter_map(|line| {
        let (key, value) = line.split_once(':')?;

        (!key.is_empty())
          .then(|| (key.trim().to_string(), value.trim().to_string()))
      })
      .collect()
  }

  /// Splits a leading front matter block off `text`.
  ///
  /// The block must start the text with a `---` line and end at the first
  /// following `---` line. Without one the metadata is empty and the whole
  /// text is returned as the body.
  #[must_use]
  pub fn split(text: &str) -> (Self, &str) {
    let Some(captures) = re::FRONT_MATTER.captures(text) else {
      return (Self::default(), text);
    };

    let header = captures.get(1).map_or("", |header| header.as_str());

    let end = captures.get(0).map_or(0, |block| block.end());

    (Self::parse(header), &text[end..])
  }

  #[must_use]
  pub fn title(&self) -> Option<&str> {
    self.non_empty("title")
  }
}

impl FromIterator<(String, String)> for FrontMatter {
  fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
    Self {
      entries: iter.into_iter().collect(),
    }
  }
}
