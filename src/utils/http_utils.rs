//! HTTP 요청 관련 유틸리티

use actix_web::dev::ServiceRequest;

/// 미들웨어용: `ServiceRequest`에서 클라이언트 IP 주소 추출
///
/// 프록시나 로드 밸런서를 고려하여 다양한 헤더에서 실제 클라이언트 IP를 추출합니다.
///
/// # 우선순위
/// 1. `X-Forwarded-For` (첫 번째 IP)
/// 2. `X-Real-IP`
/// 3. `X-Client-IP`
/// 4. `CF-Connecting-IP` (Cloudflare)
/// 5. 연결 정보에서 peer 주소
pub fn extract_client_ip_from_service_request(req: &ServiceRequest) -> Option<String> {
    extract_ip_from_parts(req.headers(), req.peer_addr())
}

fn extract_ip_from_parts(
    headers: &actix_web::http::header::HeaderMap,
    peer_addr: Option<std::net::SocketAddr>,
) -> Option<String> {
    // X-Forwarded-For 헤더 확인 (프록시 환경에서 가장 일반적)
    if let Some(forwarded_for) = headers.get("X-Forwarded-For") {
        if let Ok(forwarded_str) = forwarded_for.to_str() {
            // 첫 번째 IP만 사용 (체인의 첫 번째가 원본 클라이언트)
            if let Some(first_ip) = forwarded_str.split(',').next() {
                let trimmed_ip = first_ip.trim();
                if !trimmed_ip.is_empty() {
                    return Some(trimmed_ip.to_string());
                }
            }
        }
    }

    // X-Real-IP 헤더 확인
    if let Some(real_ip) = headers.get("X-Real-IP") {
        if let Ok(ip_str) = real_ip.to_str() {
            return Some(ip_str.to_string());
        }
    }

    // X-Client-IP 헤더 확인
    if let Some(client_ip) = headers.get("X-Client-IP") {
        if let Ok(ip_str) = client_ip.to_str() {
            return Some(ip_str.to_string());
        }
    }

    // CF-Connecting-IP 헤더 확인 (Cloudflare)
    if let Some(cf_ip) = headers.get("CF-Connecting-IP") {
        if let Ok(ip_str) = cf_ip.to_str() {
            return Some(ip_str.to_string());
        }
    }

    // 마지막 수단: 연결 정보에서 peer 주소
    peer_addr.map(|addr| addr.ip().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_forwarded_for_takes_first_ip() {
        let req = TestRequest::default()
            .insert_header(("X-Forwarded-For", "203.0.113.5, 10.0.0.1"))
            .to_srv_request();

        assert_eq!(
            extract_client_ip_from_service_request(&req),
            Some("203.0.113.5".to_string())
        );
    }

    #[test]
    fn test_real_ip_fallback() {
        let req = TestRequest::default()
            .insert_header(("X-Real-IP", "198.51.100.7"))
            .to_srv_request();

        assert_eq!(
            extract_client_ip_from_service_request(&req),
            Some("198.51.100.7".to_string())
        );
    }

    #[test]
    fn test_no_headers_no_peer() {
        let req = TestRequest::default().to_srv_request();
        assert_eq!(extract_client_ip_from_service_request(&req), None);
    }
}
