use std::hash::Hash;

use indexmap::IndexMap;

/// 按键升序重新排列字典，返回新的有序字典
///
/// ```
/// use orion_helpful::dict::sort_by_key;
/// use std::collections::HashMap;
///
/// let map = HashMap::from([("c", 1), ("b", 2), ("a", 3), ("d", 4)]);
/// let sorted = sort_by_key(map);
/// let pairs: Vec<_> = sorted.into_iter().collect();
/// assert_eq!(pairs, vec![("a", 3), ("b", 2), ("c", 1), ("d", 4)]);
/// ```
pub fn sort_by_key<K, V, I>(map: I) -> IndexMap<K, V>
where
    K: Hash + Eq + Ord,
    I: IntoIterator<Item = (K, V)>,
{
    let mut sorted: IndexMap<K, V> = map.into_iter().collect();
    sorted.sort_keys();
    sorted
}
