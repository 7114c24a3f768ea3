#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use js_sys::Date;
use thiserror::Error;

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
use crate::models::AdminInfo;
#[cfg(feature = "mock")]
use crate::models;

/// Failure of a backend call, already flattened to text for display.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(not(feature = "mock"))]
fn admin_info_url(force: bool) -> String {
    let mut url = format!("{}/admin", API_BASE);
    if force {
        url.push_str(&format!("?_ts={}", Date::now() as u64));
    }
    url
}

/// 获取管理信息（用户、角色、角色绑定）
///
/// A forced fetch bypasses every HTTP cache on the way.
pub async fn fetch_admin_info(force: bool) -> Result<AdminInfo, ApiError> {
    #[cfg(feature = "mock")]
    {
        let _ = force;
        return Ok(models::mock_admin_info());
    }

    #[cfg(not(feature = "mock"))]
    {
        let mut request = Request::get(&admin_info_url(force));
        if force {
            request = request
                .header("Cache-Control", "no-cache, no-store, max-age=0")
                .header("Pragma", "no-cache");
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("{:?}", e)))?;

        if !response.ok() {
            return Err(ApiError::Http(response.status()));
        }

        response
            .json::<AdminInfo>()
            .await
            .map_err(|e| ApiError::Parse(format!("{:?}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_render_with_their_kind() {
        assert_eq!(ApiError::Http(503).to_string(), "HTTP error: 503");
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
        assert_eq!(ApiError::Parse("eof".to_string()).to_string(), "Parse error: eof");
    }
}
