use std::net::SocketAddr;
use std::sync::Arc;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::middleware::Compress;
use actix_web::web::{Data, ServiceConfig};
use futures_util::future::join_all;
use log::{debug, info};
use crate::http::structs::http_service_data::HttpServiceData;
use crate::metrics::structs::metric_set::MetricSet;

pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

pub fn http_service_routes(data: Arc<HttpServiceData>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/metrics").route(web::get().to(http_service_metrics)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

pub fn http_service(addr: SocketAddr, data: Arc<HttpServiceData>) -> std::io::Result<(ServerHandle, Server)>
{
    info!("[HTTP] Starting server listener on {addr}");
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .configure(http_service_routes(data.clone()))
    })
        .bind((addr.ip(), addr.port()))?
        .disable_signals()
        .run();

    Ok((server.handle(), server))
}

/// Scrapes every registry concurrently and merges the results in registry
/// order.
pub async fn http_service_collect(data: &HttpServiceData) -> MetricSet
{
    let sets = join_all(data.registries.iter().map(|registry| registry.scrape())).await;
    let mut merged = MetricSet::new();
    for set in sets {
        merged.merge(set);
    }
    merged
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_metrics(request: HttpRequest, data: Data<Arc<HttpServiceData>>) -> HttpResponse
{
    let merged = http_service_collect(data.get_ref()).await;
    debug!("[HTTP] Scrape from {:?}: {} samples", request.peer_addr(), merged.len());
    HttpResponse::Ok()
        .content_type(PROMETHEUS_CONTENT_TYPE)
        .body(merged.render())
}

#[tracing::instrument(level = "debug")]
pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[HTTP] Request from {:?}: 404 Not Found {}", request.peer_addr(), request.path());
    HttpResponse::NotFound()
        .content_type(ContentType::plaintext())
        .body("404 Not Found")
}
