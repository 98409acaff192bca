//! 类型定义模块

mod zone;

pub use zone::{DEFAULT_MAXIMUM_CALLS, DecommissionReport, PurgeReport, SearchOptions};

// Re-export provider 库的公共类型
pub use route53_orchestrator_provider::{
    ChangeAction, ChangeBatch, ChangeInfo, ChangeStatus, HostedZone, RecordSetPage, RecordType,
    RecordTypeFilter, ResourceRecordSet,
};
