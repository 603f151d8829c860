//! 外部 GeoIP API 实现
//!
//! 使用外部 HTTP API（ip-api.com 格式）进行 IP 地理位置查询。
//! 每个请求只发起一次调用：不重试、不缓存。

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::Agent;

use super::provider::{GeoLookup, GeoRecord};
use crate::config::GeoIpConfig;
use crate::errors::{IpscopeError, Result};

/// 外部 API GeoIP Provider
pub struct ExternalApiProvider {
    api_url_template: String,
    agent: Agent,
}

impl ExternalApiProvider {
    /// 创建外部 API Provider
    ///
    /// `api_url_template` 使用 `{ip}` 作为占位符
    /// 例如: `http://ip-api.com/json/{ip}`
    pub fn new(api_url_template: &str, timeout: Option<Duration>) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(timeout)
            .build()
            .into();

        Self {
            api_url_template: api_url_template.to_string(),
            agent,
        }
    }

    pub fn from_config(config: &GeoIpConfig) -> Self {
        Self::new(
            &config.api_url,
            config.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn request_url(&self, ip: &str) -> String {
        self.api_url_template.replace("{ip}", ip)
    }

    /// 去掉查询串（字段列表等）后的请求地址
    pub fn public_url(&self, ip: &str) -> String {
        let template = self
            .api_url_template
            .split_once('?')
            .map_or(self.api_url_template.as_str(), |(base, _)| base);
        template.replace("{ip}", ip)
    }

    /// 同步请求（在 spawn_blocking 中调用）
    fn fetch_sync(agent: &Agent, url: &str) -> Result<GeoRecord> {
        let resp = agent.get(url).call().map_err(|e| {
            warn!("GeoIP API request to \"{}\" failed: {}", url, e);
            IpscopeError::from(e)
        })?;

        let record: GeoRecord = resp.into_body().read_json().map_err(|e| {
            warn!("GeoIP API response from \"{}\" parse failed: {}", url, e);
            IpscopeError::from(e)
        })?;

        trace!(
            "External API lookup: status={:?}, country={:?}, city={:?}",
            record.status, record.country_code, record.city
        );

        Ok(record)
    }
}

#[async_trait]
impl GeoLookup for ExternalApiProvider {
    async fn lookup(&self, ip: &str) -> Result<GeoRecord> {
        let url = self.request_url(ip);
        let agent = self.agent.clone();
        debug!("Querying geolocation service for {}", ip);

        // ureq 是同步客户端，放到阻塞线程池执行
        tokio::task::spawn_blocking(move || Self::fetch_sync(&agent, &url))
            .await
            .map_err(|e| {
                warn!("GeoIP spawn_blocking failed: {}", e);
                IpscopeError::upstream_failure(e.to_string())
            })?
    }

    fn name(&self) -> &'static str {
        "ExternalAPI"
    }

    fn raw_url(&self, ip: &str) -> String {
        self.public_url(ip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;

    /// 本地起一个只应答一次的 HTTP 服务，返回指向它的 URL 模板
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            let Ok((mut stream, _)) = listener.accept() else {
                return;
            };
            let mut received = Vec::new();
            let mut buf = [0u8; 1024];
            while !received.windows(4).any(|w| w == b"\r\n\r\n") {
                match stream.read(&mut buf) {
                    Ok(0) | Err(_) => break,
                    Ok(n) => received.extend_from_slice(&buf[..n]),
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            let _ = stream.write_all(response.as_bytes());
        });

        format!("http://{}/json/{{ip}}?fields=status,message", addr)
    }

    fn local_provider(template: &str) -> ExternalApiProvider {
        ExternalApiProvider::new(template, Some(Duration::from_secs(5)))
    }

    #[test]
    fn test_request_url_substitution() {
        let provider = ExternalApiProvider::new("http://ip-api.com/json/{ip}?fields=66846719", None);
        assert_eq!(
            provider.request_url("8.8.8.8"),
            "http://ip-api.com/json/8.8.8.8?fields=66846719"
        );
    }

    #[test]
    fn test_public_url_drops_query() {
        let provider =
            ExternalApiProvider::new("http://geo.internal:8080/json/{ip}?fields=status,lat", None);
        assert_eq!(
            provider.public_url("1.2.3.4"),
            "http://geo.internal:8080/json/1.2.3.4"
        );
        assert_eq!(provider.raw_url("1.2.3.4"), provider.public_url("1.2.3.4"));

        let plain = ExternalApiProvider::new("http://ip-api.com/json/{ip}", None);
        assert_eq!(plain.public_url("8.8.8.8"), "http://ip-api.com/json/8.8.8.8");
    }

    #[tokio::test]
    async fn test_success_body_decoded() {
        let template = serve_once(
            "200 OK",
            r#"{"status":"success","country":"Germany","countryCode":"DE","lat":52.5}"#,
        );

        let record = local_provider(&template).lookup("5.6.7.8").await.unwrap();

        assert!(record.is_success());
        assert_eq!(record.country_code.as_deref(), Some("DE"));
        assert_eq!(record.lat, Some(52.5));
    }

    #[tokio::test]
    async fn test_non_2xx_status_is_failure() {
        let template = serve_once("503 Service Unavailable", r#"{"status":"fail"}"#);

        let err = local_provider(&template).lookup("8.8.8.8").await.unwrap_err();

        assert!(matches!(err, IpscopeError::UpstreamFailure(_)));
        assert_eq!(err.code(), "E003");
    }

    #[tokio::test]
    async fn test_undecodable_body_is_failure() {
        let template = serve_once("200 OK", "nope!");

        let err = local_provider(&template).lookup("8.8.8.8").await.unwrap_err();

        assert!(matches!(err, IpscopeError::UpstreamFailure(_)));
    }

    #[tokio::test]
    async fn test_fail_status_is_rejection() {
        let template = serve_once("200 OK", r#"{"status":"fail","message":"reserved range"}"#);

        let record = local_provider(&template).lookup("0.1.2.3").await.unwrap();

        assert!(!record.is_success());
        assert!(matches!(
            record.into_success(),
            Err(IpscopeError::UpstreamRejection(Some(ref m))) if m == "reserved range"
        ));
    }

    /// 依赖外部网络服务，CI 环境可能失败
    #[tokio::test]
    #[ignore]
    async fn test_lookup_real_service() {
        let provider = ExternalApiProvider::new("http://ip-api.com/json/{ip}", None);

        let record = provider.lookup("8.8.8.8").await.expect("lookup should succeed");

        assert!(record.is_success());
        assert_eq!(record.country_code.as_deref(), Some("US"));
    }

    /// 依赖外部网络服务，CI 环境可能失败
    #[tokio::test]
    #[ignore]
    async fn test_lookup_private_address_rejected() {
        let provider = ExternalApiProvider::new("http://ip-api.com/json/{ip}", None);

        // 私有 IP 查询（ip-api.com 返回 {"status":"fail",...}）
        let record = provider.lookup("192.168.1.1").await.expect("transport ok");

        assert!(!record.is_success());
        assert!(record.into_success().is_err());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_failure() {
        // 端口 9 (discard) 在本机通常没有监听，连接会立即被拒绝
        let provider =
            ExternalApiProvider::new("http://127.0.0.1:9/json/{ip}", Some(Duration::from_secs(2)));

        let err = provider.lookup("8.8.8.8").await.unwrap_err();

        assert!(matches!(err, IpscopeError::UpstreamFailure(_)));
    }
}
