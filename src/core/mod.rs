//! # Core Framework Module
//!
//! 백엔드 서비스를 위한 핵심 프레임워크 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 의존성 주입 컨테이너
//! - **ServiceLocator**: 전역 싱글톤 DI 컨테이너
//! - **자동 레지스트리**: `inventory` 기반 컴파일 타임 서비스 등록
//! - **싱글톤 관리**: Thread-safe한 인스턴스 생명주기 관리
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web ResponseError 자동 구현
//! - **자동 변환**: thiserror 기반 에러 체인 관리
//!
//! ## 컴포넌트 등록 방법
//!
//! ### 매크로 기반 자동 등록
//! 1. 구조체에 `#[service]` 또는 `#[repository]` 매크로 적용
//! 2. `Arc<T>` 필드로 의존성 선언
//! 3. 비즈니스 로직 구현
//! 4. 컴파일 시 자동으로 레지스트리에 등록됨
//!
//! ### 외부 라이브러리 통합
//! 1. 래퍼 구조체 생성
//! 2. `ServiceLocator::set()` 으로 수동 등록
//! 3. 다른 서비스에서 `Arc<WrapperType>` 으로 주입

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
