//! 通用工具函数

/// 任一字段包含查询串（大小写不敏感）即视为命中
///
/// 空查询匹配任意记录
pub fn any_field_matches<'a, I>(fields: I, query: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.to_lowercase();
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&query))
}
