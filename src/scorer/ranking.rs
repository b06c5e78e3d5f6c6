use std::cmp::Ordering;

/// Stable descending sort by `key`. Equal keys keep their input order,
/// which may carry upstream rank.
pub fn rank_desc<T, F>(mut items: Vec<T>, key: F) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| key(b).partial_cmp(&key(a)).unwrap_or(Ordering::Equal));
    items
}

/// [`rank_desc`] then keep at most `cap` items: a sorted prefix of the full ranking.
pub fn rank_and_trim<T, F>(items: Vec<T>, key: F, cap: usize) -> Vec<T>
where
    F: Fn(&T) -> f64,
{
    let mut ranked = rank_desc(items, key);
    ranked.truncate(cap);
    ranked
}
