use std::collections::BTreeMap;

/// Transform every value of a map, keeping exactly the same set of keys.
pub fn map_values<K, V, W, F>(map: BTreeMap<K, V>, mut f: F) -> BTreeMap<K, W>
where
    K: Ord,
    F: FnMut(V) -> W,
{
    map.into_iter().map(|(key, value)| (key, f(value))).collect()
}
