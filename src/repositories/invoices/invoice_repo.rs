//! # 청구서 리포지토리 구현
//!
//! 발주 조직 청구서 엔티티의 데이터 액세스 계층입니다.
//! 청구서는 발행 후 금액이 변하지 않는 불변 문서이므로 업데이트는
//! 상태 전이(지불/무효화)만 허용합니다.

use std::sync::Arc;
use futures_util::stream::TryStreamExt;
use mongodb::{bson::{doc, oid::ObjectId}, options::IndexOptions, IndexModel};
use crate::{
    caching::redis::RedisClient,
    core::errors::AppError,
    core::registry::Repository,
    db::Database,
    domain::entities::invoice::{Invoice, InvoiceStatus},
};
use singleton_macro::repository;

/// 청구서 데이터 액세스 리포지토리
///
/// ## 캐싱 전략
///
/// - 개별 청구서: `invoice:{invoice_id}`, TTL 600초
/// - 발행 후 금액이 변하지 않으므로 캐시 일관성 부담이 낮음
#[repository(name = "invoice", collection = "invoices")]
pub struct InvoiceRepository {
    /// MongoDB 데이터베이스 연결 (자동 주입)
    db: Arc<Database>,

    /// Redis 캐시 클라이언트 (자동 주입)
    redis: Arc<RedisClient>,
}

impl InvoiceRepository {
    /// ID로 청구서 조회
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Invoice>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let cache_key = self.cache_key(id);

        // 캐시 확인
        if let Ok(Some(cached)) = self.redis.get::<Invoice>(&cache_key).await {
            return Ok(Some(cached));
        }

        // DB 조회
        let invoice = self.collection::<Invoice>()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        // 캐시 저장 (10분)
        if let Some(ref invoice) = invoice {
            let _ = self.redis
                .set_with_expiry(&cache_key, invoice, 600)
                .await;
        }

        Ok(invoice)
    }

    /// 프로젝트별 청구서 목록 조회 (발행순)
    pub async fn find_by_project(&self, project_id: &str) -> Result<Vec<Invoice>, AppError> {
        let cursor = self.collection::<Invoice>()
            .find(doc! { "project_id": project_id })
            .sort(doc! { "issued_at": -1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 청구서 저장
    pub async fn create(&self, mut invoice: Invoice) -> Result<Invoice, AppError> {
        let result = self.collection::<Invoice>()
            .insert_one(&invoice)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        invoice.id = result.inserted_id.as_object_id();

        // 컬렉션 캐시 무효화
        let _ = self.invalidate_collection_cache(None).await;

        Ok(invoice)
    }

    /// 청구서 상태 전이 (지불 완료 / 무효화)
    ///
    /// 금액 필드는 발행 후 변경하지 않습니다.
    pub async fn update_status(&self, id: &str, status: InvoiceStatus) -> Result<Option<Invoice>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))?;

        let status_bson = mongodb::bson::to_bson(&status)
            .map_err(|e| AppError::InternalError(e.to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        let updated = self.collection::<Invoice>()
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": { "status": status_bson } },
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

    /// invoices 컬렉션의 인덱스 정의
    ///
    /// 1. **프로젝트 + 발행일 복합 인덱스**: 프로젝트별 청구서 조회
    /// 2. **발주 조직 인덱스**: 조직별 청구 내역 조회
    pub fn index_models() -> Vec<IndexModel> {
        let project_index = IndexModel::builder()
            .keys(doc! { "project_id": 1, "issued_at": -1 })
            .options(IndexOptions::builder()
                .name("project_issued_at".to_string())
                .build())
            .build();

        let organization_index = IndexModel::builder()
            .keys(doc! { "organization_id": 1 })
            .options(IndexOptions::builder()
                .name("organization_id_asc".to_string())
                .build())
            .build();

        vec![project_index, organization_index]
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        self.collection::<Invoice>()
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
    fn test_index_models_cover_invoice_queries() {
        let models = InvoiceRepository::index_models();

        assert_eq!(models.len(), 2);
        // 프로젝트별 목록은 project_id 필터 + issued_at 역순 정렬을 사용
        assert!(models.iter().any(|m| m.keys == doc! { "project_id": 1, "issued_at": -1 }));
        assert!(models.iter().any(|m| m.keys == doc! { "organization_id": 1 }));
    }
}
