/// Configuration for the console frontend

/// Product name appended to every document title.
pub const APP_NAME: &str = "Console";

/// Base URL the app is served from
/// - For local development: "/"
/// - For the offline demo build: "/console/"
#[cfg(not(feature = "mock"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "mock")]
pub const BASE_URL: &str = "/console/";

// API base URL - 编译时从环境变量读取，默认本地开发地址
#[cfg(not(feature = "mock"))]
pub const API_BASE: &str = match option_env!("CONSOLE_API_BASE") {
    Some(url) => url,
    None => "http://localhost:3000/api",
};

/// A non-forced admin info refresh is skipped while the last successful load
/// is younger than this.
pub const ADMIN_INFO_CACHE_TTL_MS: i64 = 20_000;

/// Whether the role bindings tab is rendered on the admin page.
pub const ROLE_BINDINGS_TAB_ENABLED: bool = cfg!(feature = "role-bindings");

/// Helper function to construct in-app paths
pub fn app_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}
