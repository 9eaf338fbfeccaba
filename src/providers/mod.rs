//! API 服务商实现

pub mod cloudflare;
