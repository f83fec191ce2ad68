//! # 고정 윈도우 Rate Limiter
//!
//! 식별자별로 고정 시간 윈도우 내의 요청 수를 제한하는 카운터입니다.
//! 외부 파일 스토리지 벤더 API를 과부하로부터 보호하기 위해 사용됩니다.
//!
//! ## 동작 방식 (식별자별 상태 기계)
//!
//! - **윈도우 내** (now < reset_at): `count < max_requests`이면 증가 후 허용,
//!   아니면 거부 (count는 더 증가하지 않음)
//! - **만료/미존재** (now >= reset_at 또는 기록 없음): `count = 1`,
//!   `reset_at = now + window`로 새 윈도우 생성 후 허용
//!
//! 토큰 버킷이 아닌 고정 윈도우 카운터입니다: 부분 충전 없이 윈도우가
//! 만료 시점에 통째로 리셋됩니다. 따라서 윈도우 경계에 걸치면 짧은 구간에
//! 최대 `2 × max_requests`건이 허용될 수 있으며, 이는 수용된 설계 특성입니다.
//!
//! ## 동시성
//!
//! actix 워커 스레드들이 동일 저장소를 공유하므로, 확인-후-증가 시퀀스는
//! `Mutex`로 보호되는 임계 구역입니다. 두 스레드가 동시에 `count < max`를
//! 관측하고 둘 다 한도를 넘겨 증가시키는 상황을 방지합니다.
//!
//! ## 메모리 관리
//!
//! 윈도우 기록은 명시적으로 파기되지 않으므로 식별자가 다양하면 맵이
//! 무한히 자랄 수 있습니다. [`RateLimiter::sweep_expired`]가 만료된 항목을
//! 제거하며, 호스트 프로세스(main)가 주기적으로 호출을 스케줄합니다.
//! 정리는 정합성이 아니라 메모리 관리 목적입니다.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// 식별자별 윈도우 상태
#[derive(Debug, Clone)]
struct Window {
    /// 현재 윈도우에서 허용된 요청 수
    count: u32,
    /// 윈도우 만료 시각
    reset_at: Instant,
}

/// 고정 윈도우 Rate Limiter
///
/// 전역 가변 상태 대신 명시적으로 생성하여 소유하는 저장소 객체입니다.
/// 필요한 컴포넌트가 `Arc`로 보유하거나 `ServiceLocator`에 등록하여 공유합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use std::time::Duration;
/// use crate::utils::rate_limiter::RateLimiter;
///
/// let limiter = RateLimiter::new(30, Duration::from_secs(60));
///
/// if limiter.check("storage-api") {
///     // 외부 API 호출 진행
/// } else {
///     // 429 응답 등 호출자가 거부 처리를 결정
/// }
/// ```
pub struct RateLimiter {
    /// 윈도우당 최대 허용 요청 수
    max_requests: u32,
    /// 고정 윈도우 길이
    window: Duration,
    /// 식별자 → 윈도우 상태. Mutex가 확인-후-증가 임계 구역을 보호
    windows: Mutex<HashMap<String, Window>>,
}

impl RateLimiter {
    /// 새 Rate Limiter를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `max_requests` - 윈도우당 최대 허용 요청 수
    /// * `window` - 고정 윈도우 길이
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// 식별자에 대한 요청 허용 여부를 판정합니다.
    ///
    /// 허용 시 내부 카운터가 증가하며, 거부 시 카운터는 변하지 않습니다.
    /// 호출자는 거부(false)를 받았을 때 거절/대기 여부를 스스로 결정합니다.
    ///
    /// # Returns
    ///
    /// * `true` - 허용 (카운터 증가 또는 새 윈도우 생성)
    /// * `false` - 거부 (현재 윈도우 예산 소진)
    pub fn check(&self, identifier: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().unwrap();

        match windows.get_mut(identifier) {
            Some(window) if now < window.reset_at => {
                if window.count < self.max_requests {
                    window.count += 1;
                    true
                } else {
                    false
                }
            }
            _ => {
                // 기록 없음 또는 만료: 새 윈도우를 통째로 시작
                windows.insert(
                    identifier.to_string(),
                    Window {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );
                true
            }
        }
    }

    /// 만료된 윈도우 기록을 제거합니다.
    ///
    /// 정합성에는 영향이 없으며(만료 기록은 `check`에서 어차피 리셋됨),
    /// 식별자가 다양한 환경에서 맵 크기를 제한하기 위한 것입니다.
    /// 호스트 프로세스가 주기적으로 호출합니다.
    ///
    /// # Returns
    ///
    /// * 제거된 항목 수
    pub fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let mut windows = self.windows.lock().unwrap();

        let before = windows.len();
        windows.retain(|_, window| now < window.reset_at);
        before - windows.len()
    }

    /// 현재 추적 중인 식별자 수를 반환합니다.
    pub fn tracked_count(&self) -> usize {
        self.windows.lock().unwrap().len()
    }

    /// 윈도우당 최대 허용 요청 수를 반환합니다.
    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }

    /// 고정 윈도우 길이를 반환합니다.
    pub fn window(&self) -> Duration {
        self.window
    }
}

/// 스토리지 API 보호용 Rate Limiter 묶음
///
/// 두 개의 독립적인 고정 윈도우 예산을 보유합니다:
/// 일반 작업용(기본 30회/60초)과 업로드용(기본 10회/60초).
/// main에서 생성하여 `ServiceLocator::set()`으로 등록하는 인프라 컴포넌트입니다.
pub struct StorageRateLimits {
    /// 일반 작업 제한기 (목록 조회, URL 발급 등)
    pub general: RateLimiter,
    /// 업로드 제한기 (더 엄격한 예산)
    pub upload: RateLimiter,
}

impl StorageRateLimits {
    /// 명시적 예산으로 생성합니다.
    pub fn new(general: RateLimiter, upload: RateLimiter) -> Self {
        Self { general, upload }
    }

    /// 환경 변수 설정([`crate::config::StorageRateLimitConfig`])으로부터 생성합니다.
    pub fn from_env() -> Self {
        use crate::config::StorageRateLimitConfig;

        let window = StorageRateLimitConfig::window();
        Self {
            general: RateLimiter::new(StorageRateLimitConfig::general_max_requests(), window),
            upload: RateLimiter::new(StorageRateLimitConfig::upload_max_requests(), window),
        }
    }

    /// 두 제한기의 만료 윈도우를 모두 정리하고 제거된 총 항목 수를 반환합니다.
    pub fn sweep_expired(&self) -> usize {
        self.general.sweep_expired() + self.upload.sweep_expired()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_allows_up_to_max_then_denies() {
        let limiter = RateLimiter::new(2, Duration::from_secs(1));

        assert!(limiter.check("x"));
        assert!(limiter.check("x"));
        assert!(!limiter.check("x"));
        // 거부는 카운터를 올리지 않으므로 계속 거부
        assert!(!limiter.check("x"));
    }

    #[test]
    fn test_window_resets_after_expiry() {
        let limiter = RateLimiter::new(2, Duration::from_millis(50));

        assert!(limiter.check("x"));
        assert!(limiter.check("x"));
        assert!(!limiter.check("x"));

        thread::sleep(Duration::from_millis(60));

        // 새 윈도우가 통째로 시작됨
        assert!(limiter.check("x"));
        assert!(limiter.check("x"));
        assert!(!limiter.check("x"));
    }

    #[test]
    fn test_identifiers_are_independent() {
        let limiter = RateLimiter::new(1, Duration::from_secs(1));

        assert!(limiter.check("a"));
        assert!(limiter.check("b"));
        assert!(!limiter.check("a"));
        assert!(!limiter.check("b"));
    }

    #[test]
    fn test_sweep_removes_only_expired_entries() {
        let limiter = RateLimiter::new(5, Duration::from_millis(50));

        limiter.check("old");
        thread::sleep(Duration::from_millis(60));
        limiter.check("fresh");

        assert_eq!(limiter.tracked_count(), 2);
        let removed = limiter.sweep_expired();
        assert_eq!(removed, 1);
        assert_eq!(limiter.tracked_count(), 1);
    }

    #[test]
    fn test_sweep_does_not_affect_active_window() {
        let limiter = RateLimiter::new(2, Duration::from_secs(10));

        assert!(limiter.check("x"));
        assert!(limiter.check("x"));
        limiter.sweep_expired();

        // 활성 윈도우의 예산 소진 상태는 유지됨
        assert!(!limiter.check("x"));
    }

    #[test]
    fn test_concurrent_checks_never_exceed_budget() {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicU32, Ordering};

        let limiter = Arc::new(RateLimiter::new(10, Duration::from_secs(5)));
        let allowed = Arc::new(AtomicU32::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                let allowed = Arc::clone(&allowed);
                thread::spawn(move || {
                    for _ in 0..10 {
                        if limiter.check("shared") {
                            allowed.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // 80건 시도 중 정확히 예산(10건)만 허용되어야 함
        assert_eq!(allowed.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_storage_limits_sweep_covers_both() {
        let limits = StorageRateLimits::new(
            RateLimiter::new(2, Duration::from_millis(30)),
            RateLimiter::new(2, Duration::from_millis(30)),
        );

        limits.general.check("a");
        limits.upload.check("b");
        thread::sleep(Duration::from_millis(40));

        assert_eq!(limits.sweep_expired(), 2);
    }
}
