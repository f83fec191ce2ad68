//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (발주 조직 웹, 시공자 앱, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리       ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                       ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                 ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! ### Spring MVC Controller
//! ```java
//! @RestController
//! @RequestMapping("/api/v1/billing")
//! public class BillingController {
//!
//!     @Autowired
//!     private BillingService billingService;
//!
//!     @PostMapping("/payout-quote")
//!     public ResponseEntity<PayoutQuoteResponse> quotePayout(
//!         @RequestBody PayoutQuoteRequest request
//!     ) {
//!         return ResponseEntity.ok(billingService.quotePayout(request));
//!     }
//! }
//! ```
//!
//! ### 이 모듈의 Rust 구현
//! ```rust,ignore
//! use actix_web::{web, HttpResponse, post};
//! use crate::services::billing::BillingService;
//!
//! #[post("/payout-quote")]
//! pub async fn quote_payout(
//!     payload: web::Json<PayoutQuoteRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let service = BillingService::instance(); // 싱글톤 패턴
//!     let response = service.quote_payout(payload.into_inner())?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`billing`**: 정산 엔드포인트
//!   - 지급액 견적 (`POST /billing/payout-quote`)
//!   - 청구액 견적 (`POST /billing/invoice-quote`)
//!   - 청구서 발행/조회 (`POST /billing/invoices`, `GET /billing/invoices/{id}`)
//!   - 청구서 상태 전이 (`PUT /billing/invoices/{id}/status`)
//!
//! - **`members`**: 회원 관리 엔드포인트
//!   - 회원 등록 (`POST /members`)
//!   - 회원 조회 (`GET /members/{id}`)
//!   - 경력 갱신/탈퇴 (`PUT /members/{id}/experience`, `DELETE /members/{id}`)
//!
//! - **`projects`**: 프로젝트 관리 엔드포인트
//!   - 프로젝트 등록/조회 (`POST /projects`, `GET /projects`, `GET /projects/{id}`)
//!   - 상태 변경 (`PUT /projects/{id}/status`)
//!   - 접근 판정 (`GET /projects/{id}/access/{member_id}`)
//!
//! - **`files`**: 파일 스토리지 게이트웨이 엔드포인트
//!   - 업로드 세션 등록 (`POST /files/uploads`)
//!   - 프로젝트 파일 목록 (`GET /files/projects/{project_id}`)
//!
//! ## 주요 특징
//!
//! - **비동기 처리**: 모든 핸들러가 `async/await` 사용
//! - **타입 안전성**: JSON ↔ Rust 구조체 자동 직렬화, validator로 입력 검증
//! - **통합 에러 처리**: AppError가 HTTP 상태 코드로 자동 매핑

pub mod billing;
pub mod files;
pub mod members;
pub mod projects;
