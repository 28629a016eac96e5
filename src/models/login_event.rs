use std::fmt;

/// 登录结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginOutcome {
    /// 密码认证被拒绝（包括不存在的用户）
    Failed,
    /// 密码认证成功
    Succeeded,
}

impl LoginOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginOutcome::Failed => "failed",
            LoginOutcome::Succeeded => "succeeded",
        }
    }
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 登录事件
///
/// 由行分类器从单行日志中提取，借用该行的文本，
/// 立即交给聚合器计数，不会被保存。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginEvent<'a> {
    pub outcome: LoginOutcome,
    pub user: &'a str,
    pub ip: &'a str,
}

impl<'a> LoginEvent<'a> {
    pub fn failed(user: &'a str, ip: &'a str) -> Self {
        Self {
            outcome: LoginOutcome::Failed,
            user,
            ip,
        }
    }

    pub fn succeeded(user: &'a str, ip: &'a str) -> Self {
        Self {
            outcome: LoginOutcome::Succeeded,
            user,
            ip,
        }
    }
}

impl fmt::Display for LoginEvent<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} login for {} from {}", self.outcome, self.user, self.ip)
    }
}
