//! 청구서 리포지토리 모듈

pub mod invoice_repo;

pub use invoice_repo::InvoiceRepository;
