use std::fmt::{Display, Formatter};

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody<'a> {
  error: &'a str,
}

#[derive(Debug)]
pub enum ForwardError {
  MissingRun,
  UpstreamUnavailable(reqwest::Error),
  UpstreamBody(reqwest::Error),
}

impl ForwardError {
  fn message(&self) -> &'static str {
    match self {
      ForwardError::MissingRun => "Missing RUN",
      ForwardError::UpstreamUnavailable(_) => "Upstream request failed",
      ForwardError::UpstreamBody(_) => "Upstream body unreadable",
    }
  }
}

impl Display for ForwardError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      ForwardError::MissingRun => f.write_str(self.message()),
      ForwardError::UpstreamUnavailable(err) | ForwardError::UpstreamBody(err) => {
        write!(f, "{}: {}", self.message(), err)
      }
    }
  }
}

impl std::error::Error for ForwardError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ForwardError::MissingRun => None,
      ForwardError::UpstreamUnavailable(err) | ForwardError::UpstreamBody(err) => Some(err),
    }
  }
}

impl ResponseError for ForwardError {
  fn status_code(&self) -> StatusCode {
    match self {
      ForwardError::MissingRun => StatusCode::BAD_REQUEST,
      ForwardError::UpstreamUnavailable(_) | ForwardError::UpstreamBody(_) => StatusCode::BAD_GATEWAY,
    }
  }

  fn error_response(&self) -> HttpResponse {
    HttpResponse::build(self.status_code()).json(ErrorBody {
      error: self.message(),
    })
  }
}
