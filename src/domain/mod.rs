//! 도메인 계층 모듈
//!
//! 마켓플레이스의 핵심 도메인 타입과 순수 계산 로직을 정의합니다.
//!
//! # Modules
//!
//! - [`billing`] - 정산 계산 (원천징수, 이체 수수료, 플랫폼 수수료) 순수 함수
//! - [`members`] - 회원 레벨 분류 및 접근 판정 순수 함수
//! - [`entities`] - MongoDB 영속화 대상 엔티티
//! - [`dto`] - HTTP 요청/응답 데이터 구조
//!
//! 계산 로직([`billing`], [`members`])은 I/O와 완전히 분리된 순수 함수로,
//! 서비스 계층이 영속화·전달 전에 호출합니다.

pub mod billing;
pub mod members;
pub mod entities;
pub mod dto;
