//! 工具函数

use serde::{Deserialize, Deserializer};

/// 缺失或 `null` 都按 `Default` 处理
///
/// 配合 `#[serde(default, deserialize_with = "...")]` 使用。
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
