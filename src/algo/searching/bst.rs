use std::cmp::Ordering;

#[derive(Debug, Clone)]
struct Node<K> {
    key: K,
    left: Option<usize>,
    right: Option<usize>,
}

/// An unbalanced binary search tree.
///
/// Nodes are stored in a vector and refer to their children by index; all
/// operations are iterative, so a degenerate tree (e.g., the result of
/// inserting keys in sorted order) has linear height but does not exhaust the
/// call stack.
///
/// Inserting a key already in the tree has no effect.
///
/// # Examples
///
/// ```
/// use classic_algo::algo::searching::BinarySearchTree;
///
/// let mut tree: BinarySearchTree<_> = [50, 30, 70, 20, 40].into_iter().collect();
/// assert!(!tree.insert(30));
/// assert!(tree.contains(&40));
/// assert_eq!(tree.search_path(&45), vec![&50, &30, &40]);
/// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![20, 30, 40, 50, 70]);
/// assert_eq!(tree.height(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct BinarySearchTree<K> {
    nodes: Vec<Node<K>>,
}

impl<K> Default for BinarySearchTree<K> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<K: Ord> BinarySearchTree<K> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts a key, returning whether it was not already in the tree.
    pub fn insert(&mut self, key: K) -> bool {
        let new = self.nodes.len();
        let Some(mut curr) = self.root() else {
            self.nodes.push(Node {
                key,
                left: None,
                right: None,
            });
            return true;
        };

        loop {
            let node = &mut self.nodes[curr];
            let child = match key.cmp(&node.key) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
            match *child {
                Some(next) => curr = next,
                None => {
                    *child = Some(new);
                    break;
                }
            }
        }

        self.nodes.push(Node {
            key,
            left: None,
            right: None,
        });
        true
    }

    /// Returns whether `key` is in the tree.
    pub fn contains(&self, key: &K) -> bool {
        self.search_path(key).last().is_some_and(|&last| last == key)
    }

    /// Returns the keys compared with `key` while searching for it, from the
    /// root down; the last one is `key` itself if it is in the tree.
    pub fn search_path(&self, key: &K) -> Vec<&K> {
        let mut path = Vec::new();
        let mut next = self.root();
        while let Some(curr) = next {
            let node = &self.nodes[curr];
            path.push(&node.key);
            next = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => None,
            };
        }
        path
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf, or zero if the tree is empty.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(usize, usize)> = self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((curr, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[curr];
            stack.extend(
                [node.left, node.right]
                    .into_iter()
                    .flatten()
                    .map(|child| (child, depth + 1)),
            );
        }
        height
    }

    /// Returns an iterator on the keys in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            nodes: &self.nodes,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root());
        iter
    }

    fn root(&self) -> Option<usize> {
        // The first key inserted stays at the root
        (!self.nodes.is_empty()).then_some(0)
    }
}

impl<K: Ord> FromIterator<K> for BinarySearchTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        for key in iter {
            tree.insert(key);
        }
        tree
    }
}

impl<K: Ord> Extend<K> for BinarySearchTree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

/// An in-order iterator on the keys of a [`BinarySearchTree`].
pub struct Iter<'a, K> {
    nodes: &'a [Node<K>],
    /// Nodes whose left subtree has been entered but not yet returned.
    stack: Vec<usize>,
}

impl<K> Iter<'_, K> {
    fn push_left_spine(&mut self, mut next: Option<usize>) {
        while let Some(curr) = next {
            self.stack.push(curr);
            next = self.nodes[curr].left;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let curr = self.stack.pop()?;
        let nodes = self.nodes;
        self.push_left_spine(nodes[curr].right);
        Some(&nodes[curr].key)
    }
}

impl<'a, K: Ord> IntoIterator for &'a BinarySearchTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Iter<'a, K> {
        self.iter()
    }
}
