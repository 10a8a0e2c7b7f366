pub const UPSTREAM_URL: &str = "https://script.google.com/macros/s/AKfycbyIjxmxJGzjIUYFxoMg48sgFcXY_6yNKQe_IZ4X5zqseYEpb_24uVqGEZ-VO9r5cKKh/exec";
pub const RUN_PARAM: &str = "RUN";
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Clone, PartialEq)]
pub struct ForwardConfig {
  pub upstream_url: Box<str>,
}

impl Default for ForwardConfig {
  fn default() -> Self {
    ForwardConfig::new(UPSTREAM_URL)
  }
}

impl ForwardConfig {
  pub fn new(upstream_url: &str) -> Self {
    Self {
      upstream_url: Box::from(upstream_url),
    }
  }

  pub fn target_url(&self, run: &str) -> String {
    let separator = if self.upstream_url.contains('?') { '&' } else { '?' };

    format!(
      "{}{}{}={}",
      self.upstream_url,
      separator,
      RUN_PARAM,
      urlencoding::encode(run)
    )
  }
}
