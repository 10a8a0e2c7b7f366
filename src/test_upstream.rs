use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};

use actix_web::http::header::LOCATION;
use actix_web::web::{self, Query};
use actix_web::{App, HttpRequest, HttpResponse, HttpServer};

/// Local stand-in for the upstream, served on an ephemeral port.
pub struct TestUpstream {
  pub addr: SocketAddr,
  pub hits: web::Data<AtomicUsize>,
}

impl TestUpstream {
  pub fn start() -> std::io::Result<Self> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let hits = web::Data::new(AtomicUsize::new(0));
    let app_hits = hits.clone();

    let server = HttpServer::new(move || {
      App::new()
        .app_data(app_hits.clone())
        .default_service(web::to(respond))
    })
      .workers(1)
      .disable_signals()
      .listen(listener)?
      .run();

    actix_web::rt::spawn(server);

    Ok(Self { addr, hits })
  }

  pub fn url(&self, path: &str) -> String {
    format!("http://{}{}", self.addr, path)
  }

  pub fn hit_count(&self) -> usize {
    self.hits.load(Ordering::SeqCst)
  }
}

/// An address nothing listens on.
pub fn closed_addr() -> std::io::Result<SocketAddr> {
  let listener = TcpListener::bind("127.0.0.1:0")?;
  listener.local_addr()
}

async fn respond(req: HttpRequest, hits: web::Data<AtomicUsize>) -> HttpResponse {
  hits.fetch_add(1, Ordering::SeqCst);

  match req.path() {
    "/ok" => HttpResponse::Ok()
      .content_type("application/json")
      .body(r#"{"ok":true}"#),
    "/fail" => HttpResponse::InternalServerError()
      .content_type("text/plain")
      .body("Internal error"),
    "/bare" => HttpResponse::Ok().body("no type"),
    "/echo" => {
      let run = Query::<Vec<(String, String)>>::from_query(req.query_string())
        .ok()
        .and_then(|pairs| pairs.into_inner().into_iter().find(|(name, _)| name == "RUN"))
        .map(|(_, value)| value)
        .unwrap_or_default();

      HttpResponse::Ok().content_type("text/plain").body(run)
    }
    "/inspect" => {
      let caller_header = if req.headers().contains_key("x-caller") { "present" } else { "absent" };

      HttpResponse::Ok()
        .content_type("text/plain")
        .body(format!("{} {}", req.method(), caller_header))
    }
    "/binary" => HttpResponse::Ok()
      .content_type("application/octet-stream")
      .body(vec![0xff_u8, 0x00, 0xfe, 0x80]),
    "/redirect" => HttpResponse::Found()
      .insert_header((LOCATION, "/hop"))
      .finish(),
    "/hop" => HttpResponse::TemporaryRedirect()
      .insert_header((LOCATION, "/target"))
      .finish(),
    "/target" => HttpResponse::Ok().content_type("text/plain").body("X"),
    "/loop" => HttpResponse::Found()
      .insert_header((LOCATION, "/loop"))
      .finish(),
    _ => HttpResponse::NotFound().content_type("text/plain").body("unknown"),
  }
}
