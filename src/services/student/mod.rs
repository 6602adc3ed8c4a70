//! Student registry service
//!
//! - `types`: 学生记录、校验后的命令和响应体
//! - `error`: 错误类型及 HTTP 映射
//! - `extract`: JSON 请求体提取器
//! - `registry`: 内存注册表及五个操作
//! - `handlers`: axum 路由处理函数

pub mod error;
pub mod extract;
pub mod handlers;
pub mod registry;
pub mod types;

pub use error::{ErrorKind, StudentError};
pub use registry::{SharedRegistry, StudentRegistry, parse_id};
pub use types::{ErrorBody, Student, StudentDraft, StudentEnvelope, StudentId};
