/// Backend base URL, resolved at compile time:
/// - Development: http://localhost:8000 (default)
/// - Production: via BACKEND_URL env var (see .env.example)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:8000",
};
