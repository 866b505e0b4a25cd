//! # lensconv - 眼镜度数换算隐形眼镜度数
//!
//! 按镜眼距校正公式把眼镜度数换算成隐形眼镜度数，并按 0.25D 取整。
//!
//! ## 核心函数
//! - [`optics::normalize`] - 输入文本 → 屈光度（"500" / "5.00" 两种写法）
//! - [`optics::contact_power`] - 镜眼距校正与取整
//! - [`optics::format_diopter`] - 处方字符串
//! - [`optics::step_input`] - 加减按钮步进
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── optics/  (换算核心，纯函数)
//!   │     ├── models/  (屈光状态、换算结果)
//!   │     ├── report/  (对照表、CSV、曲线图)
//!   │     └── batch/   (处方表批量处理)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

pub mod batch;
pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod optics;
pub mod report;
pub mod utils;

pub use error::{LensError, Result};
pub use models::{ConversionResult, EyeCondition, VertexAdvice};
pub use optics::{contact_power, format_diopter, normalize, OpticsConfig};
