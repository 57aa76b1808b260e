use derive_getters::Getters;
use derive_more::{Deref, From};
use indexmap::IndexMap;
use orion_error::ToStructError;
use serde_derive::{Deserialize, Serialize};

use super::error::{DictReason, DictResult};

pub type AttrMap<V> = IndexMap<String, V>;

/// 以属性名访问的字典
///
/// 字段集合在运行期才确定时使用；读取或删除不存在的属性返回
/// [`DictReason::NoSuchAttribute`]，而不是静默返回默认值。
#[derive(Getters, Clone, Debug, Serialize, Deserialize, PartialEq, Deref, From)]
#[serde(transparent)]
pub struct AttrDict<V> {
    dict: AttrMap<V>,
}

impl<V> Default for AttrDict<V> {
    fn default() -> Self {
        Self {
            dict: AttrMap::new(),
        }
    }
}

impl<V> AttrDict<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_attr(&self, name: &str) -> DictResult<&V> {
        self.dict
            .get(name)
            .ok_or_else(|| DictReason::NoSuchAttribute(name.to_string()).to_err())
    }

    pub fn get_attr_mut(&mut self, name: &str) -> DictResult<&mut V> {
        self.dict
            .get_mut(name)
            .ok_or_else(|| DictReason::NoSuchAttribute(name.to_string()).to_err())
    }

    /// 设置属性，返回被覆盖的旧值
    pub fn set_attr<S: Into<String>>(&mut self, name: S, value: V) -> Option<V> {
        self.dict.insert(name.into(), value)
    }

    /// 删除属性，保持其余属性的插入顺序
    pub fn del_attr(&mut self, name: &str) -> DictResult<V> {
        self.dict
            .shift_remove(name)
            .ok_or_else(|| DictReason::NoSuchAttribute(name.to_string()).to_err())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.dict.contains_key(name)
    }
}

impl<V: Clone> AttrDict<V> {
    /// Independent copy; changes to either side never show in the other.
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl<S: Into<String>, V> FromIterator<(S, V)> for AttrDict<V> {
    fn from_iter<I: IntoIterator<Item = (S, V)>>(iter: I) -> Self {
        Self {
            dict: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use orion_error::ErrorCode;

    use super::*;

    #[test]
    fn test_attr_access() {
        let mut d: AttrDict<String> = [("hello", "world".to_string())].into_iter().collect();
        assert_eq!(d.get_attr("hello").unwrap(), "world");
        assert_eq!(d.get("hello"), Some(&"world".to_string()));

        d.set_attr("hello", "wtf".to_string());
        assert_eq!(d.get_attr("hello").unwrap(), "wtf");
        assert_eq!(d["hello"], "wtf");

        let err = d.get_attr("world").unwrap_err();
        assert_eq!(
            err.reason(),
            &DictReason::NoSuchAttribute("world".to_string())
        );
        assert_eq!(err.reason().error_code(), 530);
    }

    #[test]
    fn test_del_attr() {
        let mut d: AttrDict<i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
        assert_eq!(d.del_attr("b").unwrap(), 2);
        assert!(!d.has_attr("b"));
        assert!(d.del_attr("b").is_err());
        let keys: Vec<&String> = d.keys().collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_get_attr_mut() {
        let mut d: AttrDict<Vec<i32>> = AttrDict::new();
        d.set_attr("list", vec![1]);
        d.get_attr_mut("list").unwrap().push(2);
        assert_eq!(d.get_attr("list").unwrap(), &vec![1, 2]);
        assert!(d.get_attr_mut("missing").is_err());
    }

    #[test]
    fn test_copy_is_independent() {
        let mut d: AttrDict<i32> = AttrDict::new();
        d.set_attr("hello", 1);
        let mut b = d.copy();
        b.set_attr("hello", 2);
        assert_ne!(b.get_attr("hello").unwrap(), d.get_attr("hello").unwrap());
    }

    #[test]
    fn test_attr_dict_serde() {
        let mut d: AttrDict<u32> = AttrDict::new();
        d.set_attr("port", 8080);
        d.set_attr("workers", 4);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"port":8080,"workers":4}"#);
        let loaded: AttrDict<u32> = serde_yaml::from_str("port: 8080\nworkers: 4\n").unwrap();
        assert_eq!(d, loaded);
    }
}
