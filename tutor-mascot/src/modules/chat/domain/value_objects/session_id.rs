use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 会话标识长度（base-36 字符数）
const SESSION_ID_LEN: usize = 11;

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// 会话唯一标识符
///
/// 值对象：每次进程启动生成一次，之后不可变。
/// 仅作为远端服务的关联键使用，不是安全令牌。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    /// 生成新的随机会话 ID（base-36）
    pub fn generate() -> Self {
        let mut value = Uuid::new_v4().as_u128();
        let mut digits = Vec::with_capacity(SESSION_ID_LEN);

        for _ in 0..SESSION_ID_LEN {
            digits.push(BASE36_DIGITS[(value % 36) as usize]);
            value /= 36;
        }

        Self(digits.into_iter().map(char::from).collect())
    }

    /// 使用已有字符串创建（测试或回放场景）
    pub fn from_string(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SessionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
