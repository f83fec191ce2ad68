//! 프로젝트 서비스 모듈

pub mod project_service;

pub use project_service::ProjectService;
