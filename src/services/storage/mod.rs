//! 파일 스토리지 게이트웨이 서비스 모듈

pub mod file_storage_service;

pub use file_storage_service::FileStorageService;
