//! 工具函数

pub mod record_name;
