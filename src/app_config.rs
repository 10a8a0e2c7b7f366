use clap::Parser;
use log::LevelFilter;

use crate::http_client::HttpClientConfig;

#[derive(Parser, Debug)]
#[command(name = "run_forwarder")]
#[command(about = "Forwards the RUN query parameter to a fixed upstream and relays its response", long_about = None)]
pub struct AppConfig {
  #[arg(long, env = "HTTP_BIND", default_value = "0.0.0.0")]
  pub bind: String,

  #[arg(long, env = "HTTP_PORT", default_value_t = 8080)]
  pub port: u16,

  #[arg(long, env = "HTTP_WORKER_COUNT", default_value_t = 4)]
  pub workers: usize,

  /// Outbound proxy for upstream requests (http, https or socks5 URL)
  #[arg(long, env = "HTTP_PROXY_URL")]
  pub proxy_url: Option<String>,

  #[arg(long, env = "HTTP_PROXY_USER")]
  pub proxy_user: Option<String>,

  #[arg(long, env = "HTTP_PROXY_PASS")]
  pub proxy_pass: Option<String>,

  /// Allow cross-origin callers
  #[arg(long, env = "HTTP_CORS_PERMISSIVE")]
  pub cors_permissive: bool,

  #[arg(long, env = "LOG_LEVEL", default_value = "info")]
  pub log_level: String,
}

impl AppConfig {
  pub fn log_level_filter(&self) -> LevelFilter {
    self.log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Info)
  }

  pub fn http_client_config(&self) -> HttpClientConfig {
    HttpClientConfig {
      http_proxy: self.proxy_url.clone(),
      user: self.proxy_user.clone(),
      pass: self.proxy_pass.clone(),
    }
  }
}
