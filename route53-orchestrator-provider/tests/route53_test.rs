//! Route 53 Provider 集成测试
//!
//! 运行方式:
//! ```bash
//! AWS_ACCESS_KEY_ID=xxx AWS_SECRET_ACCESS_KEY=xxx TEST_HOSTED_ZONE_ID=Z123 \
//!     cargo test -p route53-orchestrator-provider --test route53_test -- --ignored --nocapture --test-threads=1
//! ```

mod common;

use common::{TestContext, generate_test_record_name};
use route53_orchestrator_provider::{
    ChangeAction, ChangeBatch, HostedZoneApi, ProviderError, RecordType, RecordTypeFilter,
};

// ============ 基础测试 ============

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and TEST_HOSTED_ZONE_ID"]
async fn test_route53_list_hosted_zones() {
    skip_if_no_credentials!(
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "TEST_HOSTED_ZONE_ID"
    );

    let ctx = require_some!(TestContext::from_env(), "创建测试上下文失败");
    let page = require_ok!(
        ctx.client.list_hosted_zones(None).await,
        "list_hosted_zones 调用失败"
    );
    assert!(!page.zones.is_empty(), "托管区域列表不应为空");
    assert!(
        page.zones.iter().all(|z| !z.id.starts_with('/')),
        "托管区域 ID 应已去掉路径前缀"
    );

    println!("✓ list_hosted_zones 测试通过，本页 {} 个区域", page.zones.len());
}

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and TEST_HOSTED_ZONE_ID"]
async fn test_route53_get_hosted_zone() {
    skip_if_no_credentials!(
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "TEST_HOSTED_ZONE_ID"
    );

    let ctx = require_some!(TestContext::from_env(), "创建测试上下文失败");
    let detail = require_ok!(
        ctx.client
            .get_hosted_zone(&format!("/hostedzone/{}", ctx.zone_id))
            .await,
        "get_hosted_zone 调用失败"
    );
    assert_eq!(detail.zone.id, ctx.zone_id.trim_start_matches("/hostedzone/"));

    println!("✓ get_hosted_zone 测试通过: {}", detail.zone.name);
}

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and TEST_HOSTED_ZONE_ID"]
async fn test_route53_list_record_sets_filtered() {
    skip_if_no_credentials!(
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "TEST_HOSTED_ZONE_ID"
    );

    let ctx = require_some!(TestContext::from_env(), "创建测试上下文失败");
    let page = require_ok!(
        ctx.client
            .list_record_sets(&ctx.zone_id, &RecordTypeFilter::parse("SOA,NS"))
            .await,
        "list_record_sets 调用失败"
    );
    assert!(
        page.records
            .iter()
            .all(|r| matches!(r.record_type, Some(RecordType::Soa | RecordType::Ns))),
        "过滤结果应只包含 SOA/NS"
    );

    println!("✓ list_record_sets 测试通过，{} 条", page.records.len());
}

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and TEST_HOSTED_ZONE_ID"]
async fn test_route53_unknown_zone_is_not_found() {
    skip_if_no_credentials!(
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "TEST_HOSTED_ZONE_ID"
    );

    let ctx = require_some!(TestContext::from_env(), "创建测试上下文失败");
    let result = ctx.client.get_hosted_zone("ZNONEXISTENT000000").await;
    assert!(
        matches!(result, Err(ProviderError::HostedZoneNotFound { .. })),
        "应返回 HostedZoneNotFound: {result:?}"
    );

    println!("✓ 不存在的托管区域测试通过");
}

// ============ 变更测试 ============

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and TEST_HOSTED_ZONE_ID"]
async fn test_route53_create_and_delete_record_set() {
    skip_if_no_credentials!(
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "TEST_HOSTED_ZONE_ID"
    );

    let ctx = require_some!(TestContext::from_env(), "创建测试上下文失败");
    let zone_name = require_some!(ctx.zone_name().await, "获取托管区域名称失败");
    let record = TestContext::test_record(&generate_test_record_name(&zone_name));

    // 1. 创建
    let batch = ChangeBatch::single(ChangeAction::Create, record.clone())
        .with_comment("integration test create");
    let info = require_ok!(
        ctx.client.change_record_sets(&ctx.zone_id, &batch).await,
        "创建记录集失败"
    );
    println!("  创建变更: {} ({:?})", info.id, info.status);

    // 2. 查询变更状态
    let status = require_ok!(ctx.client.get_change(&info.id).await, "get_change 调用失败");
    assert_eq!(status.id, info.id);

    // 3. 删除
    let batch = ChangeBatch::single(ChangeAction::Delete, record);
    require_ok!(
        ctx.client.change_record_sets(&ctx.zone_id, &batch).await,
        "删除记录集失败"
    );

    ctx.cleanup_all_test_records().await;
    println!("✓ 创建/删除记录集测试通过");
}

#[tokio::test]
#[ignore = "integration test: requires AWS_ACCESS_KEY_ID, AWS_SECRET_ACCESS_KEY and TEST_HOSTED_ZONE_ID"]
async fn test_route53_delete_missing_record_is_rejected() {
    skip_if_no_credentials!(
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "TEST_HOSTED_ZONE_ID"
    );

    let ctx = require_some!(TestContext::from_env(), "创建测试上下文失败");
    let zone_name = require_some!(ctx.zone_name().await, "获取托管区域名称失败");
    let record = TestContext::test_record(&generate_test_record_name(&zone_name));

    let batch = ChangeBatch::single(ChangeAction::Delete, record);
    let result = ctx.client.change_record_sets(&ctx.zone_id, &batch).await;
    assert!(
        matches!(result, Err(ProviderError::InvalidChangeBatch { .. })),
        "删除不存在的记录集应返回 InvalidChangeBatch: {result:?}"
    );

    println!("✓ 删除不存在记录集测试通过");
}
