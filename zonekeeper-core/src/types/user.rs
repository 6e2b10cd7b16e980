//! 调用方身份

use serde::{Deserialize, Serialize};

/// 角色：管理员可配置凭证与授权标志，普通用户只消费已授权域名。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    User,
}

/// 已通过认证的调用者。
///
/// 认证本身在 web 层完成；核心流程只消费这里的角色与配额组。
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: String,
    pub role: Role,
    /// 配额组（free / pro / ...），决定记录与邮箱的创建上限
    pub team: String,
}

impl AuthUser {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
