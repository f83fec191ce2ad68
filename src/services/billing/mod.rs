//! 정산 서비스 모듈

pub mod billing_service;

pub use billing_service::BillingService;
