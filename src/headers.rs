use crate::config::Config;
use http_client::Request;

const USER_AGENT: &str = concat!("music-library-export/", env!("CARGO_PKG_VERSION"));

/// Add headers shared by every request
pub fn add_common_headers(request: &mut Request) {
    let _ = request.insert_header("User-Agent", USER_AGENT);
    let _ = request.insert_header("Accept", "application/json");
    let _ = request.insert_header("Content-Type", "application/json");
}

/// Add the developer and user tokens required by the `/v1/me` endpoints
pub fn add_auth_headers(request: &mut Request, config: &Config) {
    add_common_headers(request);
    let _ = request.insert_header(
        "Authorization",
        format!("Bearer {}", config.developer_token).as_str(),
    );
    let _ = request.insert_header("Music-User-Token", config.user_token.as_str());
}
