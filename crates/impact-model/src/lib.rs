pub mod activity;
pub mod analysis;
pub mod phase;
pub mod record;

pub use activity::ActivityType;
pub use analysis::{
    ActivityComparison, AnalysisResult, Comparison, Demographics, GlobalAnalysis, Remark,
    TransversalKpis,
};
pub use phase::Phase;
pub use record::{DatasetByPhase, ResponseRecord, fields, legacy_alias};
