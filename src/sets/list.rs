use std::fmt::Display;
use itertools::Itertools;

use super::Number;

/// A set given by enumerating its elements.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ListSet { 
    items: Vec<Number>
}

impl ListSet { 
    pub fn new() -> Self { 
        Self::default()
    }

    pub fn len(&self) -> usize { 
        self.items.len()
    }

    pub fn is_empty(&self) -> bool { 
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Number> { 
        self.items.iter()
    }

    pub fn contains<N>(&self, n: N) -> bool
    where N: Into<Number> {
        let n = n.into();
        self.items.iter().any(|x| x == &n)
    }
}

impl<N> FromIterator<N> for ListSet
where N: Into<Number> {
    fn from_iter<T: IntoIterator<Item = N>>(iter: T) -> Self {
        let items = iter.into_iter().map(|n| n.into()).collect();
        Self { items }
    }
}

impl Display for ListSet { 
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.items.iter().join(";"))
    }
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn contains() { 
        let s = ListSet::from_iter([1, 2, 3]);
        assert!(s.contains(2));
        assert!(s.contains(2.0));
        assert!(!s.contains(4));
        assert!(!s.contains(2.5));
    }

    #[test]
    fn empty() { 
        let s = ListSet::new();
        assert!(s.is_empty());
        assert!(!s.contains(0));
    }

    #[test]
    fn display() { 
        let s = ListSet::from_iter([Number::from(1), Number::from(2.5)]);
        assert_eq!(s.to_string(), "{1;2.5}");
        assert_eq!(ListSet::new().to_string(), "{}");
    }
}
