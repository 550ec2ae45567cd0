pub const SERVER_PORT: u16 = 3080;
pub const DEFAULT_CLIENT_DIST_DIR: &str = "client/dist";

pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(SERVER_PORT)
}

pub fn client_dist_dir() -> String {
    std::env::var("CLIENT_DIST_DIR")
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_CLIENT_DIST_DIR.to_owned())
}
