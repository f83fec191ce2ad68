//! # 회원 관리 서비스 구현
//!
//! 시공 회원 계정의 생명주기를 관리하는 비즈니스 로직을 구현합니다.
//! 회원 등록, 조회, 경력 정보 갱신에 따른 레벨 재계산을 담당합니다.
//!
//! ## 레벨 정책
//!
//! 회원 레벨은 자가 신고 경력 연수와 전문 분야로부터 서버에서 계산되며,
//! 클라이언트가 직접 지정할 수 없습니다. 계산 규칙은
//! `domain::members::calculate_member_level`에 있습니다.

use std::sync::Arc;
use mongodb::bson::doc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::{
        dto::members::{MemberResponse, RegisterMemberRequest},
        entities::member::Member,
        members::calculate_member_level,
    },
    repositories::members::member_repo::MemberRepository,
};

/// 회원 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// MemberRepository가 자동으로 주입됩니다:
///
/// ```rust,ignore
/// let member_service = MemberService::instance(); // 항상 동일한 인스턴스
/// ```
#[service(name = "member")]
pub struct MemberService {
    /// 회원 데이터 액세스 리포지토리 (자동 주입)
    member_repo: Arc<MemberRepository>,
}

impl MemberService {
    /// 새 회원 등록
    ///
    /// 경력 정보로부터 회원 레벨을 계산하여 함께 저장합니다.
    ///
    /// # 인자
    ///
    /// * `request` - 회원 등록 요청 (이메일, 표시 이름, 사업 형태, 경력 정보)
    ///
    /// # 반환값
    ///
    /// * `Ok(MemberResponse)` - 등록된 회원 정보 (계산된 레벨 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    ///
    /// # 비즈니스 규칙
    ///
    /// - **이메일 유니크성**: 동일한 이메일로 두 번째 계정 등록 불가
    /// - **레벨 서버 계산**: 경력 미입력 또는 전 분야 "未経験"이면 초급
    /// - **기본 활성화**: 등록된 계정은 기본적으로 활성 상태
    pub async fn register_member(&self, request: RegisterMemberRequest) -> Result<MemberResponse, AppError> {
        let start_time = std::time::Instant::now();

        let member = Member::new(
            request.email,
            request.display_name,
            request.business_type,
            request.experience_years,
            request.specialties,
        );

        let created = self.member_repo.create(member).await?;

        log::info!(
            "회원 등록 완료: {} (레벨: {}, 소요 시간: {:?})",
            created.email,
            created.member_level,
            start_time.elapsed()
        );

        Ok(MemberResponse::from(created))
    }

    /// ID로 회원 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(MemberResponse)` - 회원 정보 DTO
    /// * `Err(AppError::NotFound)` - 해당 ID의 회원이 존재하지 않음
    pub async fn get_member(&self, id: &str) -> Result<MemberResponse, AppError> {
        let member = self
            .member_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        Ok(MemberResponse::from(member))
    }

    /// 회원 경력 정보 갱신
    ///
    /// 경력 연수와 전문 분야를 갱신하고 회원 레벨을 다시 계산합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(MemberResponse)` - 갱신된 회원 정보 (재계산된 레벨 포함)
    /// * `Err(AppError::NotFound)` - 해당 ID의 회원이 존재하지 않음
    pub async fn update_experience(
        &self,
        id: &str,
        experience_years: Option<String>,
        specialties: Vec<String>,
    ) -> Result<MemberResponse, AppError> {
        // 레벨은 저장 전에 서버에서 재계산
        let new_level = calculate_member_level(experience_years.as_deref(), &specialties);

        let level_bson = mongodb::bson::to_bson(&new_level)
            .map_err(|e| AppError::InternalError(e.to_string()))?;
        let specialties_bson = mongodb::bson::to_bson(&specialties)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let mut update_doc = doc! {
            "specialties": specialties_bson,
            "member_level": level_bson,
            "updated_at": mongodb::bson::DateTime::now(),
        };
        if let Some(ref years) = experience_years {
            update_doc.insert("experience_years", years.clone());
        }

        let updated = self
            .member_repo
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        log::info!("회원 경력 갱신: {} (새 레벨: {})", updated.email, updated.member_level);

        Ok(MemberResponse::from(updated))
    }

    /// 회원 탈퇴 (물리적 삭제)
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 회원이 삭제됨
    /// * `Err(AppError::NotFound)` - 해당 ID의 회원이 존재하지 않음
    pub async fn delete_member(&self, id: &str) -> Result<(), AppError> {
        let deleted = self.member_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("회원을 찾을 수 없습니다".to_string()));
        }

        log::info!("회원 탈퇴 처리 완료: {}", id);

        Ok(())
    }
}
