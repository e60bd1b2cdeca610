use crate::entry::Entry;

type Link = Option<Box<ChainNode>>;

struct ChainNode {
    entry: Entry,
    next: Link,
}

/// The overflow chain of one slot index.
///
/// Entries whose key hashes to an already occupied slot are kept here, in
/// insertion order. Nodes are owned by the chain and never handed out; callers
/// only ever see `&Entry`, `&mut Entry` or an `Entry` moved out of a node.
#[derive(Default)]
pub(crate) struct Chain {
    head: Link,
    len: usize,
}

impl Chain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.iter().find(|entry| entry.matches(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Entry> {
        let mut cursor = self.head.as_deref_mut();
        while let Some(node) = cursor {
            if node.entry.matches(key) {
                return Some(&mut node.entry);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Append at the tail
    pub fn push_back(&mut self, entry: Entry) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(ChainNode { entry, next: None }));
        self.len += 1;
    }

    /// Detach the head node and hand its entry back by value
    pub fn pop_front(&mut self) -> Option<Entry> {
        let mut node = self.head.take()?;
        self.head = node.next.take();
        self.len -= 1;
        Some(node.entry)
    }

    /// Unlink the first node holding `key`, keeping every other node in place
    pub fn remove(&mut self, key: &str) -> Option<Entry> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| !node.entry.matches(key)) {
            cursor = &mut cursor.as_mut()?.next;
        }
        let mut node = cursor.take()?;
        *cursor = node.next.take();
        self.len -= 1;
        Some(node.entry)
    }

    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

// Unlink node by node, the default drop would recurse once per node.
impl Drop for Chain {
    fn drop(&mut self) {
        self.clear();
    }
}

pub(crate) struct Iter<'a> {
    next: Option<&'a ChainNode>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.entry
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn keys(chain: &Chain) -> Vec<&str> {
        chain.iter().map(Entry::key).collect()
    }

    fn chain_of(ks: &[&str]) -> Chain {
        let mut chain = Chain::new();
        for k in ks {
            chain.push_back(Entry::new(*k, k.to_uppercase()));
        }
        chain
    }

    #[test]
    fn test_push_back_keeps_insertion_order() {
        let chain = chain_of(&["a", "b", "c"]);
        assert_eq!(keys(&chain), vec!["a", "b", "c"]);
        assert_eq!(chain.len(), 3);
        assert!(!chain.is_empty());
    }

    #[test]
    fn test_pop_front() {
        let mut chain = chain_of(&["a", "b"]);
        assert_eq!(chain.pop_front(), Some(Entry::new("a", "A")));
        assert_eq!(keys(&chain), vec!["b"]);
        assert_eq!(chain.pop_front(), Some(Entry::new("b", "B")));
        assert_eq!(chain.pop_front(), None);
        assert!(chain.is_empty());
        assert_eq!(chain.len(), 0);
    }

    #[test]
    fn test_remove_head_keeps_tail() {
        let mut chain = chain_of(&["a", "b", "c"]);
        assert_eq!(chain.remove("a").map(Entry::into_value), Some("A".to_string()));
        assert_eq!(keys(&chain), vec!["b", "c"]);
    }

    #[test]
    fn test_remove_middle_and_last() {
        let mut chain = chain_of(&["a", "b", "c", "d"]);
        assert!(chain.remove("c").is_some());
        assert_eq!(keys(&chain), vec!["a", "b", "d"]);
        assert!(chain.remove("d").is_some());
        assert_eq!(keys(&chain), vec!["a", "b"]);
        assert_eq!(chain.len(), 2);

        // the new tail must accept appends
        chain.push_back(Entry::new("e", "E"));
        assert_eq!(keys(&chain), vec!["a", "b", "e"]);
    }

    #[test]
    fn test_remove_missing() {
        let mut chain = chain_of(&["a", "b"]);
        assert_eq!(chain.remove("z"), None);
        assert_eq!(keys(&chain), vec!["a", "b"]);

        let mut empty = Chain::new();
        assert_eq!(empty.remove("a"), None);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut chain = chain_of(&["a", "b"]);
        chain.get_mut("b").unwrap().set_value("new");
        assert_eq!(chain.get("b").map(Entry::value), Some("new"));
        assert_eq!(chain.get("a").map(Entry::value), Some("A"));
        assert!(chain.get_mut("c").is_none());
    }

    #[test]
    fn test_drop_long_chain() {
        let mut chain = Chain::new();
        for i in 0..200_000 {
            // push_back walks the chain, so build it from the front instead
            chain.head = Some(Box::new(ChainNode {
                entry: Entry::new(i.to_string(), ""),
                next: chain.head.take(),
            }));
        }
        chain.len = 200_000;
        drop(chain);
    }

    proptest! {
        #[test]
        fn prop_remove_only_unlinks_match(
            ks in proptest::collection::hash_set("[a-z]{1,4}", 1..20),
            pick in any::<prop::sample::Index>(),
        ) {
            let ks: Vec<String> = ks.into_iter().collect();
            let mut chain = Chain::new();
            for k in &ks {
                chain.push_back(Entry::new(k.as_str(), k.as_str()));
            }
            let victim = pick.get(&ks).clone();
            prop_assert!(chain.remove(&victim).is_some());

            let expected: Vec<&str> = ks.iter().map(String::as_str).filter(|k| *k != victim).collect();
            prop_assert_eq!(keys(&chain), expected);
            prop_assert_eq!(chain.len(), ks.len() - 1);
        }
    }
}
