//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::env;

use route53_orchestrator_provider::{
    ChangeAction, ChangeBatch, Credentials, HostedZoneApi, RecordType, RecordTypeFilter,
    ResourceRecordSet, Route53Client,
};

/// 跳过测试的宏（当环境变量缺失时）
#[macro_export]
macro_rules! skip_if_no_credentials {
    ($($var:expr),+) => {
        $(
            if std::env::var($var).is_err() {
                eprintln!("跳过测试: 缺少环境变量 {}", $var);
                return;
            }
        )+
    };
}

/// 断言 `Option` 为 `Some`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_some {
    ($expr:expr $(,)?) => {{
        let opt = $expr;
        assert!(opt.is_some(), "expected Some(..), got None");
        let Some(val) = opt else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let opt = $expr;
        assert!(opt.is_some(), "{}", format_args!($($msg)+));
        let Some(val) = opt else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
    ($expr:expr, $($msg:tt)+) => {{
        let res = $expr;
        assert!(
            res.is_ok(),
            "{}: {res:?}",
            format_args!($($msg)+)
        );
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 生成唯一的测试记录名称（位于测试托管区域之下）
pub fn generate_test_record_name(zone_name: &str) -> String {
    let uuid = uuid::Uuid::new_v4();
    format!(
        "_test-{}.{}",
        &uuid.to_string()[..8],
        zone_name.trim_end_matches('.')
    )
}

/// 测试上下文 - 封装 Client 和测试托管区域
pub struct TestContext {
    pub client: Route53Client,
    pub zone_id: String,
}

impl TestContext {
    /// 从 `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` / `TEST_HOSTED_ZONE_ID` 创建
    pub fn from_env() -> Option<Self> {
        let credentials = Credentials::from_env()?;
        let zone_id = env::var("TEST_HOSTED_ZONE_ID").ok()?;
        let client = Route53Client::new(credentials).ok()?;

        Some(Self { client, zone_id })
    }

    /// 测试托管区域名称
    pub async fn zone_name(&self) -> Option<String> {
        let detail = self.client.get_hosted_zone(&self.zone_id).await.ok()?;
        Some(detail.zone.name)
    }

    /// 测试用 TXT 记录集
    pub fn test_record(name: &str) -> ResourceRecordSet {
        ResourceRecordSet::new(name, RecordType::Txt)
            .with_ttl(60)
            .with_values(["\"integration-test\""])
    }

    /// 查找并清理所有测试记录（以 _test- 开头的记录）
    pub async fn cleanup_all_test_records(&self) {
        let filter = RecordTypeFilter::from_types([RecordType::Txt]);
        if let Ok(page) = self.client.list_record_sets(&self.zone_id, &filter).await {
            for record in page.records {
                if record.name.as_deref().is_some_and(|n| n.starts_with("_test-")) {
                    let batch = ChangeBatch::single(ChangeAction::Delete, record);
                    let _ = self.client.change_record_sets(&self.zone_id, &batch).await;
                }
            }
        }
    }
}
