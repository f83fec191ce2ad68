//! # 프로젝트 리포지토리 구현
//!
//! 건설 프로젝트 엔티티의 데이터 액세스 계층입니다.
//! MongoDB를 주 저장소로 사용하고, 개별 조회에 Redis 캐싱을 적용합니다.

use std::sync::Arc;
use futures_util::stream::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::project::{Project, ProjectStatus},
};
use singleton_macro::repository;

/// 프로젝트 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - 개별 프로젝트: `project:{project_id}`, TTL 600초
/// - 목록 조회는 상태 필터가 다양해 캐싱하지 않고 인덱스로 최적화
///
/// ## 인덱스
///
/// - `status` + `created_at(desc)` 복합 인덱스: 모집 중 목록 조회 최적화
/// - `organization_id` 인덱스: 조직별 프로젝트 조회 최적화
#[repository(name = "project", collection = "projects")]
pub struct ProjectRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl ProjectRepository {
    /// ID로 프로젝트 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Project))` - 프로젝트를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 프로젝트가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Project>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Project>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let project = self.collection::<Project>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장 (10분)
        if let Some(ref project) = project {
            let _ = self.redis
                .set_with_expiry(&cache_key, project, 600)
                .await;
        }

        Ok(project)
    }

    /// 상태별 프로젝트 목록 조회 (최신순)
    ///
    /// # 인자
    ///
    /// * `status` - 필터링할 프로젝트 상태 (예: 모집 중)
    /// * `limit` - 최대 반환 건수
    pub async fn find_by_status(&self, status: ProjectStatus, limit: i64) -> Result<Vec<Project>, AppError> {
        let status_bson = mongodb::bson::to_bson(&status)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let cursor = self.collection::<Project>()
            .find(doc! { "status": status_bson })
            .sort(doc! { "created_at": -1 })
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 프로젝트 생성
    pub async fn create(&self, mut project: Project) -> Result<Project, AppError> {
        let result = self.collection::<Project>()
            .insert_one(&project)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        project.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(project)
    }

    /// 프로젝트 상태 변경
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Project))` - 변경된 프로젝트 (ReturnDocument::After)
    /// * `Ok(None)` - 해당 ID의 프로젝트가 존재하지 않음
    pub async fn update_status(&self, id: &str, status: ProjectStatus) -> Result<Option<Project>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let status_bson = mongodb::bson::to_bson(&status)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Project>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "status": status_bson, "updated_at": mongodb::bson::DateTime::now() } },
            )
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 무효화
        if updated.is_some() {
            let _ = self.invalidate_cache(id).await;
        }

        Ok(updated)
    }

    /// projects 컬렉션의 인덱스 정의
    ///
    /// 1. **상태 + 생성일 복합 인덱스**: 모집 중 목록을 최신순으로 조회
    /// 2. **발주 조직 인덱스**: 조직별 프로젝트 조회
    pub fn index_models() -> Vec<IndexModel> {
        let status_index = IndexModel::builder()
            .keys(doc! { "status": 1, "created_at": -1 })
            .options(IndexOptions::builder()
                .name("status_created_at".to_string())
                .build())
            .build();

        let organization_index = IndexModel::builder()
            .keys(doc! { "organization_id": 1 })
            .options(IndexOptions::builder()
                .name("organization_id_asc".to_string())
                .build())
            .build();

        vec![status_index, organization_index]
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        self.collection::<Project>()
            .create_indexes(Self::index_models())
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_models_cover_status_listing() {
        let models = ProjectRepository::index_models();

        assert_eq!(models.len(), 2);
        // 모집 중 목록 조회는 status 필터 + created_at 역순 정렬을 사용
        assert!(models.iter().any(|m| m.keys == doc! { "status": 1, "created_at": -1 }));
        assert!(models.iter().any(|m| m.keys == doc! { "organization_id": 1 }));
    }
}
