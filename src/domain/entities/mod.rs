//! 도메인 엔티티 모듈
//!
//! MongoDB에 영속화되는 핵심 도메인 엔티티들을 정의합니다.
//!
//! - [`member`] - 시공 회원 (레벨은 등록 시 계산되어 저장)
//! - [`project`] - 발주 조직의 건설 프로젝트
//! - [`invoice`] - 발주 조직 청구서

pub mod member;
pub mod project;
pub mod invoice;

pub use member::Member;
pub use project::{Project, ProjectStatus};
pub use invoice::{Invoice, InvoiceStatus};
