use std::sync::Arc;
use actix_web::{dev, HttpResponse, ResponseError};
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderValue, CONTENT_TYPE};
use bytes::Bytes;
use futures_core::future::LocalBoxFuture;
use futures_util::FutureExt;
use log::{debug, error};
use reqwest::{Client, Response};
use crate::forward_config::{ForwardConfig, DEFAULT_CONTENT_TYPE, RUN_PARAM};
use crate::forward_service::extract_run;
use crate::forward_service::forward_error::ForwardError;

pub struct ForwardRouteService {
  pub(super) config: Arc<ForwardConfig>,
  pub(super) http_client: Client,
}

impl Service<ServiceRequest> for ForwardRouteService {
  type Response = ServiceResponse;
  type Error = actix_web::Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  dev::always_ready!();

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let (http_request, _) = req.into_parts();
    let run = extract_run(http_request.query_string());
    let config = self.config.clone();
    let http_client = self.http_client.clone();

    async move {
      let response = match run {
        Some(run) => ForwardRouteService::exec(&http_client, &config.target_url(&run))
          .await
          .unwrap_or_else(|err| {
            error!("Forward request failed {}", err);
            err.error_response()
          }),
        None => {
          debug!("Rejected '{}' without {}", http_request.path(), RUN_PARAM);
          ForwardError::MissingRun.error_response()
        }
      };

      Ok(ServiceResponse::new(http_request, response))
    }
      .boxed_local()
  }
}

impl ForwardRouteService {
  async fn exec(http_client: &Client, target_url: &str) -> Result<HttpResponse, ForwardError> {
    let upstream_response = http_client
      .get(target_url)
      .send()
      .await
      .map_err(ForwardError::UpstreamUnavailable)?;

    debug!("Upstream responded with {}", upstream_response.status());

    let response = ForwardRouteService::map_response_head(&upstream_response);
    let body: Bytes = upstream_response
      .bytes()
      .await
      .map_err(ForwardError::UpstreamBody)?;

    Ok(response.set_body(BoxBody::new(body)))
  }

  fn map_response_head(response: &Response) -> HttpResponse {
    let mut http_response = HttpResponse::new(response.status());
    let content_type = response
      .headers()
      .get(CONTENT_TYPE)
      .cloned()
      .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CONTENT_TYPE));

    http_response.headers_mut().insert(CONTENT_TYPE, content_type);
    http_response
  }
}
