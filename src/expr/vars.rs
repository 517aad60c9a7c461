use std::collections::BTreeMap;
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Index};

use auto_impl_ops::auto_ops;
use delegate::delegate;

use crate::util::format::fmt_power;

/// Variable signature of a monomial: `{ name => exponent }`.
/// 
/// Zero exponents are never stored, so a missing name reads as 0 and
/// `{x: 2}` equals `{x: 2, y: 0}`.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "BTreeMap<String, isize>", into = "BTreeMap<String, isize>"))]
pub struct Variables { 
    data: BTreeMap<String, isize>,
    _zero: isize
}

impl Variables { 
    pub fn new() -> Self { 
        Self::default()
    }

    delegate! { 
        to self.data { 
            #[call(len)]
            pub fn nvars(&self) -> usize;
            pub fn iter(&self) -> impl Iterator<Item = (&String, &isize)>;
        }
    }

    pub fn get(&self, name: &str) -> isize { 
        self[name]
    }

    pub fn set<S>(&mut self, name: S, exp: isize)
    where S: Into<String> {
        let name = name.into();
        if exp == 0 { 
            self.data.remove(&name);
        } else { 
            self.data.insert(name, exp);
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> { 
        self.data.keys().map(|k| k.as_str())
    }

    pub fn nonzero_len(&self) -> usize { 
        self.data.values().filter(|e| **e != 0).count()
    }

    pub fn degree(&self) -> isize { 
        self.data.values().sum()
    }

    fn reduce(&mut self) { 
        self.data.retain(|_, e| *e != 0)
    }
}

impl Index<&str> for Variables { 
    type Output = isize;

    fn index(&self, name: &str) -> &Self::Output {
        self.data.get(name).unwrap_or(&self._zero)
    }
}

impl<S> FromIterator<(S, isize)> for Variables
where S: Into<String> {
    fn from_iter<T: IntoIterator<Item = (S, isize)>>(iter: T) -> Self {
        let mut res = Self::new();
        for (name, e) in iter { 
            let name = name.into();
            let e = res.get(&name) + e;
            res.set(name, e);
        }
        res
    }
}

impl<S, const N: usize> From<[(S, isize); N]> for Variables
where S: Into<String> {
    fn from(pairs: [(S, isize); N]) -> Self {
        Self::from_iter(pairs)
    }
}

impl From<BTreeMap<String, isize>> for Variables { 
    fn from(data: BTreeMap<String, isize>) -> Self {
        let mut res = Self { data, _zero: 0 };
        res.reduce();
        res
    }
}

impl From<Variables> for BTreeMap<String, isize> { 
    fn from(v: Variables) -> Self {
        v.data
    }
}

// x^i * x^j = x^{i+j}, merged key-wise.
#[auto_ops]
impl AddAssign<&Variables> for Variables { 
    fn add_assign(&mut self, rhs: &Variables) {
        for (name, e) in rhs.iter() { 
            *self.data.entry(name.clone()).or_insert(0) += e;
        }
        self.reduce()
    }
}

impl Display for Variables { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (name, e) in self.iter() { 
            f.write_str(&fmt_power(name, *e))?;
        }
        Ok(())
    }
}

impl Debug for Variables { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.data.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_missing() { 
        let v = Variables::from([("x", 2)]);
        assert_eq!(v.get("x"), 2);
        assert_eq!(v.get("y"), 0);
        assert_eq!(v["y"], 0);
    }

    #[test]
    fn set_zero_removes() { 
        let mut v = Variables::from([("x", 2), ("y", 1)]);
        v.set("y", 0);
        assert_eq!(v.nvars(), 1);
        assert_eq!(v.names().collect::<Vec<_>>(), vec!["x"]);

        v.set("z", 0);
        assert_eq!(v.nvars(), 1);
    }

    #[test]
    fn eq_ignores_zero() { 
        let v1 = Variables::from([("x", 2)]);
        let v2 = Variables::from([("x", 2), ("y", 0)]);
        let v3 = Variables::from([("x", 2), ("y", 1)]);
        assert_eq!(v1, v2);
        assert_ne!(v1, v3);
        assert_eq!(Variables::new(), Variables::from([("x", 0)]));
    }

    #[test]
    fn add_assign() { 
        let mut v = Variables::from([("x", 2), ("y", 1)]);
        v += Variables::from([("x", 1), ("y", -1), ("z", 4)]);
        assert_eq!(v, Variables::from([("x", 3), ("z", 4)]));
        assert_eq!(v.degree(), 7);
    }

    #[test]
    fn add() { 
        let v = Variables::from([("x", 1)]);
        let w = &v + &v;
        assert_eq!(w, Variables::from([("x", 2)]));
        assert_eq!(v, Variables::from([("x", 1)]));
    }

    #[test]
    fn from_iter_merges_duplicates() { 
        let v = Variables::from_iter([("x", 1), ("x", 2)]);
        assert_eq!(v.get("x"), 3);
    }

    #[test]
    fn display() { 
        let v = Variables::from([("x", 1), ("y", 3), ("z", -2)]);
        assert_eq!(v.to_string(), "xy³z⁻²");
        assert_eq!(Variables::new().to_string(), "");
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serialize() { 
        let v = Variables::from([("x", 2), ("y", -1)]);
        let ser = serde_json::to_string(&v).unwrap();
        let des = serde_json::from_str::<Variables>(&ser).unwrap();
        assert_eq!(v, des);
    }
}
