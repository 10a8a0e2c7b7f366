use std::sync::Arc;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use futures_util::future::{ready, Ready};
use reqwest::Client;
use crate::forward_config::ForwardConfig;
use crate::forward_service::forward_route_service::ForwardRouteService;

pub struct ForwardServiceFactory {
  pub config: Arc<ForwardConfig>,
  pub http_client: Client,
}

impl ServiceFactory<ServiceRequest> for ForwardServiceFactory {
  type Response = ServiceResponse;
  type Error = actix_web::Error;
  type Config = ();
  type Service = ForwardRouteService;
  type InitError = ();
  type Future = Ready<Result<Self::Service, Self::InitError>>;

  fn new_service(&self, _: Self::Config) -> Self::Future {
    ready(Ok(ForwardRouteService {
      config: self.config.clone(),
      http_client: self.http_client.clone(),
    }))
  }
}

impl ForwardServiceFactory {
  pub fn create(http_client: Client, forward_config: Arc<ForwardConfig>) -> Self {
    Self {
      config: forward_config,
      http_client,
    }
  }
}
