//! 프로젝트 리포지토리 모듈

pub mod project_repo;

pub use project_repo::ProjectRepository;
