use std::{collections::HashSet, hash::Hash};

/// 保序去重，保留每个元素第一次出现的位置
pub fn unique<T, I>(items: I) -> Vec<T>
where
    T: Hash + Eq + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|x| seen.insert(x.clone()))
        .collect()
}

/// 展开一层嵌套
pub fn flatten<T, I>(nested: I) -> Vec<T>
where
    I: IntoIterator,
    I::Item: IntoIterator<Item = T>,
{
    nested.into_iter().flatten().collect()
}

/// Values that count as "set" for [`first_truthy`].
///
/// Zero, `false`, empty strings and collections and `None` are falsy.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_num {
    ($($t:ty),*) => {
        $(impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != (0 as $t)
            }
        })*
    };
}

impl_truthy_num!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy> Truthy for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// 返回第一个为真的值，全部为假时返回 `fallback`
///
/// ```
/// use orion_helpful::seq::first_truthy;
///
/// assert_eq!(first_truthy([None, None, Some(123)], None), Some(123));
/// assert_eq!(first_truthy(["", "", "x"], "none"), "x");
/// assert_eq!(first_truthy([0, 0], -1), -1);
/// ```
pub fn first_truthy<T, I>(items: I, fallback: T) -> T
where
    T: Truthy,
    I: IntoIterator<Item = T>,
{
    items
        .into_iter()
        .find(Truthy::is_truthy)
        .unwrap_or(fallback)
}
