use serde::Serialize;

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    /// 리소스의 정규 경로 (`/users/{id}`)
    pub uri: String,
}

impl UserResponse {
    /// 엔티티를 응답으로 렌더링합니다.
    ///
    /// `render_id`가 `false`이면 `id` 필드를 생략합니다.
    pub fn render(user: User, render_id: bool) -> Self {
        let uri = user.uri();
        let User { id, name, email, .. } = user;

        Self {
            id: render_id.then_some(id),
            name,
            email,
            uri,
        }
    }
}
