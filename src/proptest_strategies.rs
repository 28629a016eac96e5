//! Property-based testing strategies and helpers
//!
//! This module provides shared proptest strategies for use across test files.

use proptest::prelude::*;
use proptest::test_runner::Config;

/// Standard proptest configuration for all property-based tests
pub fn proptest_config() -> Config {
    Config {
        cases: 256,
        max_shrink_iters: 10000,
        ..Config::default()
    }
}

/// Custom strategies for domain-specific types
pub mod strategies {
    use super::*;

    /// 一行认证日志及其期望分类
    #[derive(Debug, Clone)]
    pub enum AuthLine {
        Failed { user: String, ip: String, line: String },
        Accepted { user: String, ip: String, line: String },
        Noise(String),
    }

    impl AuthLine {
        pub fn text(&self) -> &str {
            match self {
                AuthLine::Failed { line, .. } | AuthLine::Accepted { line, .. } => line.as_str(),
                AuthLine::Noise(line) => line.as_str(),
            }
        }
    }

    /// Generate usernames (small alphabet so keys collide often)
    pub fn username() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("root".to_string()),
            Just("admin".to_string()),
            Just("alice".to_string()),
            "[a-z][a-z0-9_.-]{0,7}",
        ]
    }

    /// Generate IPv4 addresses from a narrow range
    pub fn ip_address() -> impl Strategy<Value = String> {
        (0u8..4, 0u8..8).prop_map(|(c, d)| format!("10.0.{}.{}", c, d))
    }

    /// Generate syslog-style prefixes
    pub fn syslog_prefix() -> impl Strategy<Value = String> {
        (1u8..29, 0u32..100000).prop_map(|(day, pid)| {
            format!("Mar {:2} 10:00:00 host sshd[{}]: ", day, pid)
        })
    }

    /// Generate lines that never match either login pattern
    pub fn noise_line() -> impl Strategy<Value = String> {
        prop_oneof![
            ip_address().prop_map(|ip| format!("Connection closed by {} port 22", ip)),
            username().prop_map(|u| format!("pam_unix(sshd:session): session opened for user {}", u)),
            (username(), ip_address())
                .prop_map(|(u, ip)| format!("Accepted publickey for {} from {}", u, ip)),
            "[a-zA-Z0-9 :\\[\\]]{0,60}",
        ]
    }

    /// Generate a classified auth.log line
    pub fn auth_line() -> impl Strategy<Value = AuthLine> {
        prop_oneof![
            (syslog_prefix(), any::<bool>(), username(), ip_address()).prop_map(
                |(prefix, invalid, user, ip)| {
                    let marker = if invalid { "invalid user " } else { "" };
                    let line = format!(
                        "{}Failed password for {}{} from {} port 22 ssh2",
                        prefix, marker, user, ip
                    );
                    AuthLine::Failed { user, ip, line }
                }
            ),
            (syslog_prefix(), username(), ip_address()).prop_map(|(prefix, user, ip)| {
                let line = format!("{}Accepted password for {} from {} port 22 ssh2", prefix, user, ip);
                AuthLine::Accepted { user, ip, line }
            }),
            noise_line().prop_map(AuthLine::Noise),
        ]
    }
}
