use actix_web::web::Query;
use log::warn;

use crate::forward_config::RUN_PARAM;

pub mod forward_error;
pub mod forward_factory;
pub mod forward_route_service;

/// Returns the first `RUN` value of a raw query string, or `None` when it is absent or empty.
pub fn extract_run(query_string: &str) -> Option<String> {
  let query_pairs = match Query::<Vec<(String, String)>>::from_query(query_string) {
    Ok(pairs) => pairs.into_inner(),
    Err(err) => {
      warn!("Unable to parse query parameters {}", err);
      return None;
    }
  };

  query_pairs
    .into_iter()
    .find(|(name, _)| name == RUN_PARAM)
    .map(|(_, value)| value)
    .filter(|value| !value.is_empty())
}
