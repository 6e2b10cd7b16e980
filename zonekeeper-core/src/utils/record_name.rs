//! 记录名拼装：局部标签 ⇄ 完整域名
//!
//! Cloudflare 侧统一使用完整域名；用户输入与编辑界面使用局部标签
//! （`baidu`，根记录为 `@`）。两个方向都要求确定性，并满足往返律：
//! 对任何等于 zone 或是其真子域的 `N`，
//! `qualify(local_label(N, Z), Z) == N`。

/// 去掉域名末尾的点
#[must_use]
pub fn normalize(name: &str) -> &str {
    name.trim_end_matches('.')
}

/// 将局部标签转换为完整域名。
///
/// - `@` 或空串 → zone 本身（根记录）
/// - 已经等于 zone 或以 `.zone` 结尾 → 原样返回（幂等）
/// - 其它 → `label.zone`
#[must_use]
pub fn qualify(label: &str, zone: &str) -> String {
    let label = normalize(label);
    let zone = normalize(zone);

    if label == "@" || label.is_empty() || label == zone {
        zone.to_string()
    } else if label.ends_with(&format!(".{zone}")) {
        label.to_string()
    } else {
        format!("{label}.{zone}")
    }
}

/// 将完整域名还原为局部标签。
///
/// - 等于 zone → `@`
/// - 以 `.zone` 结尾 → 去掉后缀（含点）
/// - 其它 → 原样返回（不属于该 zone，正常流程不会出现）
#[must_use]
pub fn local_label(name: &str, zone: &str) -> String {
    let name = normalize(name);
    let zone = normalize(zone);

    if name == zone {
        "@".to_string()
    } else if let Some(prefix) = name.strip_suffix(&format!(".{zone}")) {
        prefix.to_string()
    } else {
        name.to_string()
    }
}
