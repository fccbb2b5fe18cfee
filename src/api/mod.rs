// ==========================================
// IC-CSC 分类计算器 - API 层
// ==========================================
// 职责: 提供分类 API 接口,供宿主界面调用
// ==========================================

pub mod classification_api;
pub mod error;

// 重导出核心类型
pub use classification_api::{
    AxisOptionsInfo, ClassificationApi, ClassificationResponse, ClassifyRequest,
};
pub use error::{ApiError, ApiResult};
