//! 건설 프로젝트 B2B 마켓플레이스 백엔드
//!
//! 발주 조직이 건설 프로젝트를 등록하고, 시공 회원(개인/법인)이 참여하는
//! 마켓플레이스 서비스입니다. 정산(源泉徴収 원천징수 및 플랫폼 수수료) 계산,
//! 회원 레벨 분류, 외부 파일 스토리지 API 보호용 Rate Limiting을 제공하며,
//! 싱글톤 매크로를 활용한 의존성 주입으로 구성됩니다.
//!
//! # Features
//!
//! - **정산 계산**: 개인/법인 구분에 따른 원천징수(10.21%) 및 이체 수수료 계산
//! - **조직 청구서**: 시공자 지급 총액 + 플랫폼 수수료(30%) 청구 금액 계산
//! - **회원 레벨**: 경력 연수와 전문 분야 기반 3단계 레벨 분류 및 접근 제어
//! - **Rate Limiting**: 외부 파일 스토리지 API 보호용 고정 윈도우 제한기
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 회원/프로젝트/청구서 데이터 영구 저장
//! - **Redis**: 조회 성능 향상을 위한 캐싱
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (정산, 레벨, 스토리지 게이트)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use construction_market_backend::services::billing::BillingService;
//! use construction_market_backend::domain::billing::{BusinessType, calculate_contractor_payout};
//!
//! // 순수 계산 함수 직접 호출
//! let payout = calculate_contractor_payout(BusinessType::Individual, 100_000.0);
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let billing = BillingService::instance();
//! let invoice = billing.create_invoice(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
