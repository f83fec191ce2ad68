//! # 회원 리포지토리 구현
//!
//! 회원 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용하고, Redis를 통한 캐싱을 지원합니다.
//!
//! ## 특징
//!
//! - **하이브리드 스토리지**: MongoDB + Redis 캐싱
//! - **자동 의존성 주입**: 싱글톤 매크로를 통한 DI
//! - **데이터 무결성**: 이메일 유니크 인덱스 관리

use std::sync::Arc;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::member::Member,
};
use singleton_macro::repository;

/// 회원 데이터 액세스 리포지토리
///
/// 회원 엔티티의 CRUD 연산을 담당하며, MongoDB 컬렉션과 Redis 캐시를
/// 통합하여 최적화된 데이터 액세스를 제공합니다.
///
/// ## 캐싱 전략
///
/// ### L1 Cache (Redis)
/// - **TTL**: 10분 (600초)
/// - **키 패턴**:
///   - 개별 회원: `member:{member_id}`
///   - 이메일 조회: `member:email:{email}`
///
/// ### L2 Storage (MongoDB)
/// - **컬렉션명**: `members`
/// - **인덱스**: email(unique), member_level, created_at(desc)
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환합니다:
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류
/// - **ConflictError**: 이메일 중복 등 비즈니스 규칙 위반
#[repository(name = "member", collection = "members")]
pub struct MemberRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl MemberRepository {
    /// 이메일 주소로 회원 조회
    ///
    /// 캐시 우선 조회를 통해 성능을 최적화합니다.
    ///
    /// # 인자
    ///
    /// * `email` - 조회할 회원의 이메일 주소
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Member))` - 회원을 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 회원이 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    ///
    /// # 캐싱 정책
    ///
    /// - **캐시 키**: `member:email:{email}`
    /// - **TTL**: 600초 (10분)
    /// - **캐시 미스**: MongoDB에서 조회 후 캐시에 저장
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Member>, AppError> {
        // 캐시에서 먼저 확인
        let cache_key = format!("member:email:{}", email);

        if let Ok(Some(cached)) = self.redis.get::<Member>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 에서 조회
        let member = self.collection::<Member>()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시에 저장 (10분)
        if let Some(ref member) = member {
            let _ = self.redis
                .set_with_expiry(&cache_key, member, 600)
                .await;
        }

        Ok(member)
    }

    /// ID로 회원 조회
    ///
    /// 가장 빈번한 조회 패턴이므로 적극적인 캐싱을 적용합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Member))` - 회원을 찾은 경우
    /// * `Ok(None)` - 해당 ID의 회원이 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Member>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Member>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let member = self.collection::<Member>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장
        if let Some(ref member) = member {
            let _ = self.redis
                .set_with_expiry(&cache_key, member, 600)
                .await;
        }

        Ok(member)
    }

    /// 새 회원 생성
    ///
    /// 이메일 중복 여부를 사전에 검증하고, 성공 시 관련 캐시를 무효화합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Member)` - 생성된 회원 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn create(&self, mut member: Member) -> Result<Member, AppError> {
        // 중복 확인
        if self.find_by_email(&member.email).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 이메일입니다".to_string()));
        }

        // DB에 저장. 동시 등록 경합은 이메일 유니크 인덱스가 막으므로
        // 중복 키 에러는 충돌로 변환한다
        let result = self.collection::<Member>()
            .insert_one(&member)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::ConflictError("이미 사용 중인 이메일입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        member.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(member)
    }

    /// 회원 정보 업데이트
    ///
    /// MongoDB `$set` 연산자로 지정된 필드만 변경하며,
    /// `find_one_and_update`로 조회와 업데이트를 원자적으로 수행합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Member))` - 업데이트된 회원 정보 (ReturnDocument::After)
    /// * `Ok(None)` - 해당 ID의 회원이 존재하지 않음
    pub async fn update(&self, id: &str, update_doc: mongodb::bson::Document) -> Result<Option<Member>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated_member = self.collection::<Member>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": update_doc },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        if let Some(ref member) = updated_member {
            let _ = self.invalidate_cache(id).await;
            let _ = self.redis.del(&format!("member:email:{}", member.email)).await;
        }

        Ok(updated_member)
    }

    /// 회원 삭제 (물리적 삭제)
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 회원이 성공적으로 삭제됨
    /// * `Ok(false)` - 해당 ID의 회원이 존재하지 않음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let result = self.collection::<Member>()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.deleted_count > 0 {
            // 캐시 무효화. 이메일 키는 ID와의 매핑이 없으므로 패턴으로 일괄 삭제
            let _ = self.invalidate_cache(id).await;
            let _ = self.invalidate_collection_cache(None).await;
            if let Ok(email_keys) = self.redis.keys("member:email:*").await {
                let _ = self.redis.del_multiple(&email_keys).await;
            }
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// members 컬렉션의 인덱스 정의
    ///
    /// 1. **이메일 유니크 인덱스**: 중복 이메일 방지 및 이메일 조회 최적화
    /// 2. **회원 등급 인덱스**: 등급별 회원 조회 최적화
    /// 3. **생성일 인덱스**: 최근 가입 회원 조회 및 정렬 최적화
    pub fn index_models() -> Vec<IndexModel> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let level_index = IndexModel::builder()
            .keys(doc! { "member_level": 1 })
            .options(IndexOptions::builder()
                .name("member_level_asc".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        vec![email_index, level_index, created_at_index]
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행하여 쿼리 성능을 최적화하고
    /// 이메일 유니크 제약을 DB 수준에서 강제합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        self.collection::<Member>()
            .create_indexes(Self::index_models())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// MongoDB 중복 키(E11000) 쓰기 에러 판별
fn is_duplicate_key_error(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(write_error))
            if write_error.code == 11000
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_index_enforces_uniqueness() {
        let models = MemberRepository::index_models();

        let email_index = models
            .iter()
            .find(|m| m.keys == doc! { "email": 1 })
            .expect("이메일 인덱스가 정의되어야 함");

        // 이메일 중복 방지는 애플리케이션 사전 검사가 아닌 DB 제약으로 보장
        assert_eq!(
            email_index.options.as_ref().and_then(|o| o.unique),
            Some(true)
        );
    }

    #[test]
    fn test_index_models_cover_query_patterns() {
        let models = MemberRepository::index_models();

        assert_eq!(models.len(), 3);
        assert!(models.iter().any(|m| m.keys == doc! { "member_level": 1 }));
        assert!(models.iter().any(|m| m.keys == doc! { "created_at": -1 }));
    }
}
