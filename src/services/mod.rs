//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 도메인별로 모듈화되어 회원 관리, 프로젝트 관리, 정산, 파일 스토리지
//! 중계 기능을 담당합니다.
//!
//! # Features
//!
//! - 회원 생명주기 관리 (등록, 조회, 레벨 계산)
//! - 프로젝트 등록/조회 및 레벨 기반 접근 판정
//! - 지급액/청구액 계산 및 청구서 발행
//! - 써드파티 스토리지 벤더 API 중계 (요청 제한 적용)
//! - 자동 의존성 주입 및 싱글톤 관리
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{billing::BillingService, members::MemberService};
//!
//! let billing_service = BillingService::instance();
//! let member_service = MemberService::instance();
//! ```

pub mod billing;
pub mod members;
pub mod projects;
pub mod storage;
