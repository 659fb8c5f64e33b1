//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 메모리 저장소와 SQLite `users` 테이블이 같은 구조체를 공유합니다.

use sqlx::FromRow;

/// 사용자 엔티티
///
/// 저장된 모든 사용자는 비어 있지 않은 `name`과 저장소 전체에서 유일한 `email`을 가집니다.
/// `password_hash`는 bcrypt 해시이며 어떤 응답에도 포함되지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    /// 저장소가 생성 시 할당하는 식별자 (불변)
    pub id: i64,
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// 해시된 비밀번호 (`users.password` 컬럼)
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

impl User {
    /// 리소스 URI (`/users/{id}`)
    pub fn uri(&self) -> String {
        user_uri(self.id)
    }
}

/// 생성 요청을 검증하고 비밀번호를 해싱한 뒤 저장소에 넘기는 레코드
///
/// 아직 `id`가 없다는 점만 `User`와 다릅니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUserRecord {
    /// 저장소가 할당한 `id`로 엔티티를 완성합니다.
    pub fn with_id(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
        }
    }
}

/// 사용자 리소스의 정규 경로
pub fn user_uri(id: i64) -> String {
    format!("/users/{}", id)
}
