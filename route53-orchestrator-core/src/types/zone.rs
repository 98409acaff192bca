//! 托管区域搜索 / 清理相关类型定义

use serde::{Deserialize, Serialize};

use route53_orchestrator_provider::ChangeInfo;

/// 默认最多请求的托管区域列表页数
pub const DEFAULT_MAXIMUM_CALLS: u32 = 15;

/// 托管区域搜索参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    /// 区域名子串（区分大小写，空串匹配全部）
    pub search_string: String,
    /// 是否为每个匹配区域附加记录集
    pub get_extended_details: bool,
    /// 附加记录集的类型过滤（如 `"A,MX"`，空串表示全部）
    pub extended_details_type_list: String,
    /// 最多请求的区域列表页数（记录集请求不计入）
    pub maximum_calls: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            search_string: String::new(),
            get_extended_details: false,
            extended_details_type_list: String::new(),
            maximum_calls: DEFAULT_MAXIMUM_CALLS,
        }
    }
}

impl SearchOptions {
    /// 按名称子串搜索
    #[must_use]
    pub fn new(search_string: impl Into<String>) -> Self {
        Self {
            search_string: search_string.into(),
            ..Self::default()
        }
    }

    /// 附加指定类型的记录集
    #[must_use]
    pub fn with_extended_details(mut self, type_list: impl Into<String>) -> Self {
        self.get_extended_details = true;
        self.extended_details_type_list = type_list.into();
        self
    }

    /// 设置页数上限
    #[must_use]
    pub fn with_maximum_calls(mut self, maximum_calls: u32) -> Self {
        self.maximum_calls = maximum_calls;
        self
    }
}

/// 清理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgeReport {
    /// 规范化后的托管区域 ID
    pub zone_id: String,
    /// 已删除的记录集数量
    pub deleted_count: usize,
    /// 记录集列表是否被截断（可再次调用继续清理）
    pub truncated: bool,
}

/// 下线托管区域结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecommissionReport {
    /// 记录集清理结果
    pub purge: PurgeReport,
    /// 删除托管区域的变更状态
    pub change_info: ChangeInfo,
}
