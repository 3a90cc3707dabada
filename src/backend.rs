use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use percent_encoding::percent_decode_str;
use std::{
    net::SocketAddr,
    path::{Component, Path, PathBuf},
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    sync::Arc,
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::telemetry::{log_event, LogLevel};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS: u64 = 3_600;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const ASSET_CACHE_MAX_AGE_SECONDS_BOUNDS: (u64, u64) = (0, 365 * 24 * 60 * 60);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Runtime settings for the static host, read once at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub asset_cache_max_age_seconds: u64,
    pub log_level: LogLevel,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            dist_dir: PathBuf::from(DEFAULT_DIST_DIR),
            asset_cache_max_age_seconds: DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl HostConfig {
    pub fn from_env() -> Self {
        let port = parse_env_u16("PORT", DEFAULT_PORT);
        let dist_dir = parse_env_non_empty_string("DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let asset_cache_max_age_seconds = parse_env_u64_with_bounds(
            "ASSET_CACHE_MAX_AGE_SECONDS",
            DEFAULT_ASSET_CACHE_MAX_AGE_SECONDS,
            ASSET_CACHE_MAX_AGE_SECONDS_BOUNDS,
        );
        let log_level = parse_log_level("LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            asset_cache_max_age_seconds,
            log_level,
        }
    }

    pub fn index_path(&self) -> PathBuf {
        self.dist_dir.join("index.html")
    }
}

#[derive(Clone)]
struct HostState {
    config: Arc<HostConfig>,
}

pub async fn run(config: HostConfig) -> Result<(), Box<dyn std::error::Error>> {
    let bind_address = SocketAddr::from(([0, 0, 0, 0], config.port));

    if !config.index_path().is_file() {
        log_event(
            config.log_level,
            LogLevel::Warn,
            "bundle_missing",
            serde_json::json!({
                "index_path": config.index_path().display().to_string(),
                "hint": "run `trunk build --release` first",
            }),
        );
    }

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    log_event(
        config.log_level,
        LogLevel::Info,
        "server_listening",
        serde_json::json!({
            "address": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, build_router(config)).await?;
    Ok(())
}

/// Logs a fatal host error at the configured threshold.
pub fn log_server_failure(config: &HostConfig, error: &dyn std::error::Error) {
    log_event(
        config.log_level,
        LogLevel::Warn,
        "server_failed",
        server_failure_fields(config, error),
    );
}

fn server_failure_fields(config: &HostConfig, error: &dyn std::error::Error) -> serde_json::Value {
    serde_json::json!({
        "error": error.to_string(),
        "port": config.port,
        "dist_dir": config.dist_dir.display().to_string(),
    })
}

/// Serves the built bundle. Any path that is not a file falls back to
/// `index.html` so client-side routes survive a reload, except paths that
/// name a missing asset, which get a real 404.
pub fn build_router(config: HostConfig) -> Router {
    let static_service =
        ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_path()));
    let state = HostState {
        config: Arc::new(config),
    };

    Router::new()
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state, serve_with_headers))
}

async fn serve_with_headers(State(state): State<HostState>, request: Request, next: Next) -> Response {
    let request_started_at = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let mut response = if is_missing_asset(&state.config.dist_dir, &path).await {
        StatusCode::NOT_FOUND.into_response()
    } else {
        next.run(request).await
    };

    let status = response.status();
    let policy = cache_policy(&path, status, state.config.asset_cache_max_age_seconds);
    let headers = response.headers_mut();
    headers.insert(header::CACHE_CONTROL, cache_control(&policy));
    if let Ok(request_id_header) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, request_id_header);
    }

    log_event(
        state.config.log_level,
        if status.is_success() || status.is_redirection() {
            LogLevel::Debug
        } else {
            LogLevel::Info
        },
        "static_request",
        serde_json::json!({
            "request_id": request_id.as_str(),
            "method": method.as_str(),
            "path": path,
            "status": status.as_u16(),
            "cache_control": policy,
            "duration_ms": request_started_at.elapsed().as_millis(),
        }),
    );

    response
}

/// Extension of the last path segment, if it has one.
fn asset_extension(path: &str) -> Option<&str> {
    let segment = path.rsplit('/').next()?;
    let (stem, extension) = segment.rsplit_once('.')?;
    (!stem.is_empty() && !extension.is_empty()).then_some(extension)
}

/// Documents are revalidated on every load; everything else may be cached.
fn is_document_path(path: &str) -> bool {
    match asset_extension(path) {
        None => true,
        Some(extension) => extension.eq_ignore_ascii_case("html"),
    }
}

fn cache_policy(path: &str, status: StatusCode, max_age_seconds: u64) -> String {
    if !status.is_success() {
        "no-store".to_string()
    } else if is_document_path(path) {
        "no-cache".to_string()
    } else {
        format!("public, max-age={max_age_seconds}")
    }
}

/// Maps a request path onto the bundle directory. `None` for anything that
/// tries to leave it.
fn resolve_bundle_path(dist_dir: &Path, request_path: &str) -> Option<PathBuf> {
    let decoded = percent_decode_str(request_path).decode_utf8().ok()?;
    let mut resolved = dist_dir.to_path_buf();
    for component in Path::new(decoded.trim_start_matches('/')).components() {
        match component {
            Component::Normal(segment) => resolved.push(segment),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    Some(resolved)
}

async fn is_missing_asset(dist_dir: &Path, request_path: &str) -> bool {
    if is_document_path(request_path) {
        return false;
    }

    let Some(candidate) = resolve_bundle_path(dist_dir, request_path) else {
        return false;
    };

    !tokio::fs::metadata(&candidate)
        .await
        .map(|metadata| metadata.is_file())
        .unwrap_or(false)
}

fn cache_control(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("no-store"))
}

fn parse_env_u64_with_bounds(name: &str, default: u64, bounds: (u64, u64)) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_env_u16(name: &str, default: u16) -> u16 {
    std::env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value != 0)
        .unwrap_or(default)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(name: &str, default: LogLevel) -> LogLevel {
    parse_env_non_empty_string(name)
        .and_then(|value| LogLevel::parse(&value))
        .unwrap_or(default)
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const INDEX_HTML: &str = "<!doctype html><div id=\"app\"></div>";

    fn bundle() -> TempDir {
        let dir = tempfile::tempdir().expect("temp dir");
        fs::write(dir.path().join("index.html"), INDEX_HTML).expect("write index");
        fs::create_dir(dir.path().join("assets")).expect("assets dir");
        fs::write(dir.path().join("assets").join("riverfolio.js"), "export {};").expect("write js");
        dir
    }

    async fn spawn_host(dist_dir: &Path) -> SocketAddr {
        let config = HostConfig {
            dist_dir: dist_dir.to_path_buf(),
            asset_cache_max_age_seconds: 600,
            log_level: LogLevel::Warn,
            ..HostConfig::default()
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let address = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, build_router(config)).await;
        });
        address
    }

    #[test]
    fn extensions_come_from_the_last_segment() {
        assert_eq!(asset_extension("/assets/app.js"), Some("js"));
        assert_eq!(asset_extension("/blog"), None);
        assert_eq!(asset_extension("/v1.2/projects"), None);
        assert_eq!(asset_extension("/.hidden"), None);
        assert_eq!(asset_extension("/"), None);
    }

    #[test]
    fn documents_are_revalidated_and_assets_cached() {
        assert_eq!(cache_policy("/projects", StatusCode::OK, 600), "no-cache");
        assert_eq!(cache_policy("/index.html", StatusCode::OK, 600), "no-cache");
        assert_eq!(
            cache_policy("/riverfolio_bg.wasm", StatusCode::OK, 600),
            "public, max-age=600"
        );
        assert_eq!(cache_policy("/missing.png", StatusCode::NOT_FOUND, 600), "no-store");
    }

    #[test]
    fn bundle_paths_cannot_escape_the_root() {
        let root = Path::new("/srv/dist");
        assert_eq!(
            resolve_bundle_path(root, "/assets/my%20photo.png"),
            Some(PathBuf::from("/srv/dist/assets/my photo.png"))
        );
        assert_eq!(resolve_bundle_path(root, "/../secret.txt"), None);
        assert_eq!(resolve_bundle_path(root, "/assets/%2e%2e/%2e%2e/etc/passwd"), None);
    }

    #[test]
    fn request_id_prefers_incoming_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  upstream-7 "));
        assert_eq!(resolve_request_id(&headers), "upstream-7");

        let generated = resolve_request_id(&HeaderMap::new());
        assert!(generated.starts_with("req-"));
    }

    #[test]
    fn default_config_matches_documented_values() {
        let config = HostConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.dist_dir, PathBuf::from("dist"));
        assert_eq!(config.asset_cache_max_age_seconds, 3_600);
        assert_eq!(config.index_path(), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn server_failure_carries_the_configured_host() {
        let config = HostConfig {
            port: 9090,
            log_level: LogLevel::Debug,
            ..HostConfig::default()
        };
        let error = std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use");
        let fields = server_failure_fields(&config, &error);
        assert_eq!(fields["error"], "address in use");
        assert_eq!(fields["port"], 9090);
        assert_eq!(fields["dist_dir"], "dist");
    }

    #[tokio::test]
    async fn client_routes_fall_back_to_index() {
        let dist = bundle();
        let address = spawn_host(dist.path()).await;

        let response = reqwest::get(format!("http://{address}/projects"))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers().get("cache-control").and_then(|v| v.to_str().ok()),
            Some("no-cache")
        );
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        assert_eq!(response.text().await.expect("body"), INDEX_HTML);
    }

    #[tokio::test]
    async fn assets_are_served_with_cache_headers() {
        let dist = bundle();
        let address = spawn_host(dist.path()).await;

        let response = reqwest::get(format!("http://{address}/assets/riverfolio.js"))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers().get("cache-control").and_then(|v| v.to_str().ok()),
            Some("public, max-age=600")
        );
        assert_eq!(response.text().await.expect("body"), "export {};");
    }

    #[tokio::test]
    async fn missing_assets_are_not_found() {
        let dist = bundle();
        let address = spawn_host(dist.path()).await;

        let response = reqwest::get(format!("http://{address}/assets/gone.png"))
            .await
            .expect("request succeeds");
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get("cache-control").and_then(|v| v.to_str().ok()),
            Some("no-store")
        );
    }
}
