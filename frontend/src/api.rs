#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use kafka_sonar_shared::parse_repo_metadata;
use kafka_sonar_shared::MetadataFetchError;

/// 获取仓库 star 数，单次请求，不重试
pub async fn fetch_star_count() -> Result<u64, MetadataFetchError> {
    #[cfg(feature = "mock")]
    {
        return Ok(crate::config::MOCK_STAR_COUNT);
    }

    #[cfg(not(feature = "mock"))]
    {
        let response = Request::get(crate::config::REPO_API_URL)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| MetadataFetchError::Network(e.to_string()))?;

        // 状态码与响应体都交给 parse_repo_metadata 判断，读不出的 body 按空串处理
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        parse_repo_metadata(status, &body)
    }
}
