/// Configuration for the frontend application

/// Base URL for static assets
/// - For local development and custom domains: "/"
/// - For GitHub Pages: "/kafka-sonar/"
#[cfg(not(feature = "gh-pages"))]
pub const BASE_URL: &str = "/";

#[cfg(feature = "gh-pages")]
pub const BASE_URL: &str = "/kafka-sonar/";

// Repository metadata endpoint - 编译时从环境变量读取，默认 GitHub REST API
#[cfg(not(feature = "mock"))]
pub const REPO_API_URL: &str = match option_env!("KAFKA_SONAR_REPO_API") {
    Some(url) => url,
    None => "https://api.github.com/repos/oslabs-beta/Kafka-Sonar",
};

/// Star count reported by the offline client.
#[cfg(feature = "mock")]
pub const MOCK_STAR_COUNT: u64 = 42;

/// Helper function to construct asset paths
pub fn asset_path(path: &str) -> String {
    // Remove leading slash if present
    let path = path.strip_prefix('/').unwrap_or(path);
    format!("{}{}", BASE_URL, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_path_joins_base_once() {
        assert_eq!(asset_path("/download.gif"), format!("{BASE_URL}download.gif"));
        assert_eq!(asset_path("download.gif?t=1"), format!("{BASE_URL}download.gif?t=1"));
    }
}
