use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use actix_web::dev::ServerHandle;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use parking_lot::Mutex;
use serde_json::{json, Value};
use pt_exporter::backend::errors::BackendError;
use pt_exporter::backend::structs::qbittorrent_client::QbittorrentClient;
use pt_exporter::backend::structs::transmission_client::TransmissionClient;
use pt_exporter::backend::traits::pollable_backend::PollableBackend;
use pt_exporter::collector::structs::collector_registry::CollectorRegistry;
use pt_exporter::config::enums::client_kind::ClientKind;
use pt_exporter::config::structs::client_config::ClientConfig;
use pt_exporter::metrics::enums::naming_scheme::NamingScheme;
use pt_exporter::metrics::structs::emitter_options::EmitterOptions;

/// Session token the mock server currently accepts.
type ValidToken = web::Data<Arc<Mutex<String>>>;

fn client_config(kind: ClientKind, addr: SocketAddr, username: &str, password: &str) -> ClientConfig {
    ClientConfig {
        name: String::from("MOCK"),
        kind,
        url: format!("http://{addr}"),
        username: username.to_string(),
        password: password.to_string(),
        timeout: Some(5),
    }
}

fn start_mock<F>(token: Arc<Mutex<String>>, routes: F) -> (SocketAddr, ServerHandle)
where
    F: Fn(&mut web::ServiceConfig) + Clone + Send + 'static,
{
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(token.clone()))
            .configure(routes.clone())
    })
        .workers(1)
        .bind(("127.0.0.1", 0))
        .unwrap();
    let addr = server.addrs()[0];
    let server = server.disable_signals().run();
    let handle = server.handle();
    actix_web::rt::spawn(server);
    (addr, handle)
}

async fn qb_login(form: web::Form<HashMap<String, String>>, token: ValidToken) -> HttpResponse {
    if form.get("username").map(String::as_str) == Some("admin") && form.get("password").map(String::as_str) == Some("adminadmin") {
        HttpResponse::Ok()
            .insert_header(("Set-Cookie", format!("SID={}; HttpOnly; path=/", token.lock())))
            .body("Ok.")
    } else {
        HttpResponse::Ok().body("Fails.")
    }
}

async fn qb_maindata(request: HttpRequest, token: ValidToken) -> HttpResponse {
    let expected = format!("SID={}", token.lock());
    let cookie = request.headers().get("cookie").and_then(|value| value.to_str().ok()).unwrap_or("");
    if cookie != expected {
        return HttpResponse::Forbidden().body("Forbidden");
    }
    HttpResponse::Ok().json(json!({
        "rid": 1,
        "full_update": true,
        "server_state": {
            "alltime_dl": 1000,
            "alltime_ul": 2000,
            "dl_info_speed": 100,
            "up_info_speed": 200,
            "free_space_on_disk": 50000
        },
        "torrents": {
            "aaaa": {
                "name": "alpha",
                "size": 10,
                "downloaded": 5,
                "uploaded": 1,
                "tracker": "https://a.example/announce",
                "state": "downloading",
                "category": ""
            },
            "bbbb": {
                "name": "beta",
                "size": 20,
                "downloaded": 20,
                "uploaded": 40,
                "tracker": "https://b.example/announce",
                "state": "stalledUP",
                "category": "movies"
            }
        }
    }))
}

fn qb_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/v2/auth/login", web::post().to(qb_login));
    cfg.route("/api/v2/sync/maindata", web::get().to(qb_maindata));
}

async fn tr_rpc(request: HttpRequest, body: web::Json<Value>, token: ValidToken) -> HttpResponse {
    let current = token.lock().clone();
    let presented = request.headers().get("X-Transmission-Session-Id").and_then(|value| value.to_str().ok());
    if presented != Some(current.as_str()) {
        return HttpResponse::Conflict()
            .insert_header(("X-Transmission-Session-Id", current))
            .finish();
    }
    let arguments = match body["method"].as_str().unwrap_or("") {
        "session-get" => json!({ "download-dir": "/downloads", "version": "4.0.5" }),
        "session-stats" => json!({
            "downloadSpeed": 11,
            "uploadSpeed": 22,
            "cumulative-stats": { "downloadedBytes": 3000, "uploadedBytes": 4000 }
        }),
        "free-space" => json!({ "path": "/downloads", "size-bytes": 123456 }),
        "torrent-get" => json!({
            "torrents": [
                {
                    "hashString": "cccc",
                    "name": "gamma",
                    "totalSize": 30,
                    "downloadedEver": 30,
                    "uploadedEver": 60,
                    "status": 6,
                    "trackers": [{ "announce": "udp://tracker.example:1337/announce" }]
                }
            ]
        }),
        _ => return HttpResponse::Ok().json(json!({ "result": "method name not recognized" })),
    };
    HttpResponse::Ok().json(json!({ "result": "success", "arguments": arguments }))
}

fn tr_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/transmission/rpc", web::post().to(tr_rpc));
}

#[actix_web::test]
async fn test_qbittorrent_login_and_poll() {
    let token = Arc::new(Mutex::new(String::from("sid-1")));
    let (addr, handle) = start_mock(token.clone(), qb_routes);
    let client = QbittorrentClient::new(&client_config(ClientKind::qbittorrent, addr, "admin", "adminadmin")).unwrap();

    assert!(matches!(client.poll().await, Err(BackendError::Authentication(_))));
    client.login().await.unwrap();
    assert!(client.is_logged_in());

    let snapshot = client.poll().await.unwrap();
    assert_eq!(snapshot.status.downloaded, 1000);
    assert_eq!(snapshot.status.upload_speed, 200);
    assert_eq!(snapshot.status.free_space_on_disk, Some(50000));
    assert_eq!(snapshot.torrents.len(), 2);
    let beta = snapshot.torrents.iter().find(|record| record.name == "beta").unwrap();
    assert_eq!(beta.hash_label(), "bbbb");
    assert_eq!(beta.state, "stalledUP");
    assert_eq!(beta.category_label(), Some("movies"));

    let status = client.fetch_status().await.unwrap();
    assert_eq!(status.uploaded, 2000);
    assert_eq!(client.fetch_torrents().await.unwrap().len(), 2);

    handle.stop(false).await;
}

#[actix_web::test]
async fn test_qbittorrent_bad_credentials() {
    let token = Arc::new(Mutex::new(String::from("sid-1")));
    let (addr, handle) = start_mock(token, qb_routes);
    let client = QbittorrentClient::new(&client_config(ClientKind::qbittorrent, addr, "admin", "wrong")).unwrap();

    let error = client.login().await.unwrap_err();
    assert!(error.is_authentication());
    assert!(!client.is_logged_in());

    handle.stop(false).await;
}

#[actix_web::test]
async fn test_qbittorrent_expired_session() {
    let token = Arc::new(Mutex::new(String::from("sid-1")));
    let (addr, handle) = start_mock(token.clone(), qb_routes);
    let client = QbittorrentClient::new(&client_config(ClientKind::qbittorrent, addr, "admin", "adminadmin")).unwrap();
    client.login().await.unwrap();

    *token.lock() = String::from("sid-2");
    let error = client.poll().await.unwrap_err();
    assert!(error.is_authentication());
    assert!(!client.is_logged_in());

    client.login().await.unwrap();
    assert!(client.poll().await.is_ok());

    handle.stop(false).await;
}

#[actix_web::test]
async fn test_transmission_session_handshake_and_poll() {
    let token = Arc::new(Mutex::new(String::from("tr-1")));
    let (addr, handle) = start_mock(token.clone(), tr_routes);
    let client = TransmissionClient::new(&client_config(ClientKind::transmission, addr, "", "")).unwrap();

    client.login().await.unwrap();
    assert_eq!(client.session_id(), Some(String::from("tr-1")));

    let snapshot = client.poll().await.unwrap();
    assert_eq!(snapshot.status.downloaded, 3000);
    assert_eq!(snapshot.status.uploaded, 4000);
    assert_eq!(snapshot.status.download_speed, 11);
    assert_eq!(snapshot.status.upload_speed, 22);
    assert_eq!(snapshot.status.free_space_on_disk, Some(123456));
    assert_eq!(snapshot.torrents.len(), 1);
    assert_eq!(snapshot.torrents[0].hash_label(), "cccc");
    assert_eq!(snapshot.torrents[0].state, "seeding");
    assert_eq!(snapshot.torrents[0].tracker, "udp://tracker.example:1337/announce");

    handle.stop(false).await;
}

#[actix_web::test]
async fn test_transmission_expired_session_id() {
    let token = Arc::new(Mutex::new(String::from("tr-1")));
    let (addr, handle) = start_mock(token.clone(), tr_routes);
    let client = TransmissionClient::new(&client_config(ClientKind::transmission, addr, "", "")).unwrap();
    client.login().await.unwrap();

    *token.lock() = String::from("tr-2");
    let error = client.poll().await.unwrap_err();
    assert!(error.is_authentication());
    assert_eq!(client.session_id(), Some(String::from("tr-2")));
    assert!(client.poll().await.is_ok());

    handle.stop(false).await;
}

#[actix_web::test]
async fn test_registry_against_mock_qbittorrent() {
    let token = Arc::new(Mutex::new(String::from("sid-1")));
    let (addr, handle) = start_mock(token.clone(), qb_routes);
    let options = Arc::new(EmitterOptions {
        scheme: NamingScheme::Detailed,
        lang: String::from("en"),
        rewrite_tracker: Default::default(),
        use_category_as_tracker: true,
        max_download_speed: 0,
        max_upload_speed: 0,
    });
    let registry = CollectorRegistry::from_config(&client_config(ClientKind::qbittorrent, addr, "admin", "adminadmin"), options).unwrap();

    let body = registry.scrape().await.render();
    let host = addr.to_string();
    assert!(body.contains(&format!("pt_up{{name=\"MOCK\",host=\"{host}\",client=\"qbittorrent\"}} 1\n")));
    assert!(body.contains("torrent_hash=\"aaaa\",torrent_name=\"alpha\",tracker=\"a.example\"} 2\n"));
    assert!(body.contains("torrent_hash=\"bbbb\",torrent_name=\"beta\",tracker=\"movies\"} 6\n"));

    *token.lock() = String::from("sid-2");
    let body = registry.scrape().await.render();
    assert!(body.contains(&format!("pt_up{{name=\"MOCK\",host=\"{host}\",client=\"qbittorrent\"}} 0\n")));
    let body = registry.scrape().await.render();
    assert!(body.contains(&format!("pt_up{{name=\"MOCK\",host=\"{host}\",client=\"qbittorrent\"}} 1\n")));

    handle.stop(false).await;
}

#[actix_web::test]
async fn test_unreachable_client_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = QbittorrentClient::new(&client_config(ClientKind::qbittorrent, addr, "admin", "adminadmin")).unwrap();
    let error = client.login().await.unwrap_err();
    assert!(matches!(error, BackendError::Transport(_)));
}
