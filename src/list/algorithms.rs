use crate::list::List;
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for List<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for List<T> {}

impl<T: PartialOrd> PartialOrd for List<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for List<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for List<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: Hash> Hash for List<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_eq() {
        let list: List<i32> = (0..5).collect();
        let same: List<i32> = (0..5).collect();
        let shorter: List<i32> = (0..4).collect();
        let other: List<i32> = (1..6).collect();

        assert_eq!(list, same);
        assert_ne!(list, shorter);
        assert_ne!(list, other);
        assert_eq!(List::<i32>::new(), List::new());
    }

    #[test]
    fn list_ord() {
        let small: List<i32> = (0..3).collect();
        let large: List<i32> = (1..3).collect();
        let prefix: List<i32> = (0..2).collect();

        assert!(small < large);
        assert!(prefix < small);
        assert!(List::<i32>::new() < prefix);
    }

    #[test]
    fn list_clone() {
        let list: List<i32> = (0..5).collect();
        let mut cloned = list.clone();
        assert_eq!(list, cloned);

        cloned.push_back(5);
        assert_ne!(list, cloned);
        assert_eq!(list.len(), 5);
    }

    #[test]
    fn list_hash() {
        let list: List<i32> = (0..5).collect();
        let same: List<i32> = (0..5).collect();
        let other: List<i32> = (0..6).collect();

        assert_eq!(hash_of(&list), hash_of(&same));
        assert_ne!(hash_of(&list), hash_of(&other));
    }
}
