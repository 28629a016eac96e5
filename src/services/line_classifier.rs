//! 行分类器
//!
//! 将一行认证日志分类为失败登录、成功登录或无关行。
//!
//! - 失败模式：`Failed password for (invalid user )?<user> from <ip>`
//! - 成功模式：`Accepted password for <user> from <ip>`
//!
//! 先匹配失败模式，命中后不再尝试成功模式（首个命中优先）。
//! `<user>` 与 `<ip>` 均为最长的非空白字符序列。这里的空白除 Unicode
//! White_Space 外还包括信息分隔符 `\x1c`..`\x1f`。

use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::LoginEvent;

const FAILED_PHRASE: &str = "Failed password for ";
const ACCEPTED_PHRASE: &str = "Accepted password for ";

static FAILED_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"Failed password for (invalid user )?(?P<user>[^\s\x1c-\x1f]+) from (?P<ip>[^\s\x1c-\x1f]+)",
    )
    .expect("failed-login pattern must compile")
});

static SUCCESS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Accepted password for (?P<user>[^\s\x1c-\x1f]+) from (?P<ip>[^\s\x1c-\x1f]+)")
        .expect("accepted-login pattern must compile")
});

/// 两个固定短语的预过滤器
///
/// 绝大多数 auth.log 行（CRON、session opened 等）不含任何短语，
/// 一次线性扫描即可跳过正则匹配。
static PREFILTER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasickBuilder::new()
        .match_kind(MatchKind::LeftmostFirst)
        .build([FAILED_PHRASE, ACCEPTED_PHRASE])
        .expect("prefilter phrases must build")
});

/// 行中是否可能含有登录事件
pub fn is_candidate(line: &str) -> bool {
    PREFILTER.is_match(line)
}

/// 分类单行日志
///
/// # 返回
/// * `Some(LoginEvent)` - 失败或成功登录
/// * `None` - 无法识别的行（不是错误）
pub fn classify(line: &str) -> Option<LoginEvent<'_>> {
    if !is_candidate(line) {
        return None;
    }

    if let Some(caps) = FAILED_PATTERN.captures(line) {
        let user = caps.name("user")?.as_str();
        let ip = caps.name("ip")?.as_str();
        return Some(LoginEvent::failed(user, ip));
    }

    let caps = SUCCESS_PATTERN.captures(line)?;
    let user = caps.name("user")?.as_str();
    let ip = caps.name("ip")?.as_str();
    Some(LoginEvent::succeeded(user, ip))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LoginOutcome;

    #[test]
    fn test_failed_password() {
        let line = "Mar  1 10:00:00 host sshd[123]: Failed password for root from 192.168.1.10 port 22 ssh2";
        let event = classify(line).expect("should match");
        assert_eq!(event.outcome, LoginOutcome::Failed);
        assert_eq!(event.user, "root");
        assert_eq!(event.ip, "192.168.1.10");
    }

    #[test]
    fn test_failed_password_invalid_user() {
        let event = classify("Failed password for invalid user admin from 10.0.0.5")
            .expect("should match");
        assert_eq!(event.outcome, LoginOutcome::Failed);
        assert_eq!(event.user, "admin");
        assert_eq!(event.ip, "10.0.0.5");
    }

    #[test]
    fn test_accepted_password() {
        let event = classify("sshd[9]: Accepted password for alice from 10.0.0.9 port 50022 ssh2")
            .expect("should match");
        assert_eq!(event.outcome, LoginOutcome::Succeeded);
        assert_eq!(event.user, "alice");
        assert_eq!(event.ip, "10.0.0.9");
    }

    #[test]
    fn test_unrelated_lines_ignored() {
        assert!(classify("Connection closed by 10.0.0.1").is_none());
        assert!(classify("Accepted publickey for bob from 10.0.0.2 port 22").is_none());
        assert!(classify("").is_none());
    }

    #[test]
    fn test_truncated_lines_ignored() {
        assert!(classify("Failed password for root from").is_none());
        assert!(classify("Failed password for root").is_none());
        assert!(classify("Accepted password for ").is_none());
    }

    #[test]
    fn test_case_sensitive() {
        assert!(classify("failed password for root from 10.0.0.1").is_none());
        assert!(classify("ACCEPTED PASSWORD FOR root FROM 10.0.0.1").is_none());
    }

    #[test]
    fn test_failed_wins_when_both_match() {
        let line = "Accepted password for bob from 1.1.1.1 Failed password for eve from 2.2.2.2";
        let event = classify(line).expect("should match");
        assert_eq!(event.outcome, LoginOutcome::Failed);
        assert_eq!(event.user, "eve");
        assert_eq!(event.ip, "2.2.2.2");
    }

    #[test]
    fn test_tokens_are_maximal_non_whitespace_runs() {
        let event = classify("Failed password for user.name@corp from [2001:db8::1]:22\tport")
            .expect("should match");
        assert_eq!(event.user, "user.name@corp");
        assert_eq!(event.ip, "[2001:db8::1]:22");
    }

    #[test]
    fn test_information_separators_end_tokens() {
        for sep in ['\u{1c}', '\u{1d}', '\u{1e}', '\u{1f}'] {
            let failed = format!("Failed password for ro{}ot from 1.2.3.4", sep);
            assert!(classify(&failed).is_none(), "separator {:?} inside user", sep);

            let accepted = format!("Accepted password for bob from 1.2.3.4{}x", sep);
            let event = classify(&accepted).expect("should match");
            assert_eq!(event.ip, "1.2.3.4");
        }
    }

    #[test]
    fn test_unicode_whitespace_ends_tokens() {
        for sep in ['\u{0b}', '\u{0c}', '\u{85}', '\u{a0}', '\u{2028}'] {
            let line = format!("Failed password for ro{}ot from 1.2.3.4", sep);
            assert!(classify(&line).is_none(), "whitespace {:?} inside user", sep);
        }
    }

    #[test]
    fn test_invalid_user_literal_as_username() {
        // "invalid" 后没有 "user " 时，invalid 本身就是用户名
        let event = classify("Failed password for invalid from 10.0.0.3").expect("should match");
        assert_eq!(event.user, "invalid");
    }

    #[test]
    fn test_trailing_newline_not_captured() {
        let event = classify("Failed password for root from 10.0.0.1\r\n").expect("should match");
        assert_eq!(event.ip, "10.0.0.1");
    }

    #[test]
    fn test_prefilter() {
        assert!(is_candidate("xx Failed password for y"));
        assert!(is_candidate("Accepted password for z"));
        assert!(!is_candidate("session opened for user root"));
    }
}
