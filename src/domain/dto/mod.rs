//! DTO (Data Transfer Object) 모듈
//!
//! HTTP 요청/응답 데이터 구조를 정의합니다.
//! 요청 DTO는 `validator` 크레이트로 입력 검증을 수행하며,
//! 응답 DTO는 엔티티에서 민감하지 않은 필드만 추려 변환합니다.
//!
//! # Modules
//!
//! - [`billing`] - 정산 견적 및 청구서 DTO
//! - [`members`] - 회원 등록/조회 DTO
//! - [`projects`] - 프로젝트 등록/조회/접근 판정 DTO
//! - [`files`] - 파일 스토리지 게이트웨이 DTO

use serde::{Deserialize, Serialize};

pub mod billing;
pub mod members;
pub mod projects;
pub mod files;

/// 표준 API 응답 래퍼
///
/// 성공/실패 여부와 메시지를 포함하는 공통 응답 형식입니다.
///
/// ```json
/// { "success": true, "data": { ... }, "message": null }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 처리 성공 여부
    pub success: bool,
    /// 응답 데이터 (실패 시 None)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// 부가 메시지 (에러 설명 등)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// 성공 응답을 생성합니다.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    /// 실패 응답을 생성합니다.
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message),
        }
    }
}
