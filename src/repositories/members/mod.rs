//! 회원 리포지토리 모듈

pub mod member_repo;

pub use member_repo::MemberRepository;
