/// An item that can be ordered in a [BinaryHeap] by its total estimated cost.
pub trait Prioritized {
    fn f(&self) -> f64;
}

impl Prioritized for f64 {
    fn f(&self) -> f64 {
        *self
    }
}

/// Array-backed binary min-heap keyed on [Prioritized::f]. For every index `i` the item
/// at `i` is no larger than the items at `2i + 1` and `2i + 2`. Items with equal `f` come
/// out in an order that depends only on the sequence of operations.
#[derive(Clone, Debug)]
pub struct BinaryHeap<T> {
    items: Vec<T>,
}

impl<T> Default for BinaryHeap<T> {
    fn default() -> BinaryHeap<T> {
        BinaryHeap { items: Vec::new() }
    }
}

impl<T: Prioritized> BinaryHeap<T> {
    pub fn new() -> BinaryHeap<T> {
        BinaryHeap::default()
    }
    pub fn with_capacity(capacity: usize) -> BinaryHeap<T> {
        BinaryHeap {
            items: Vec::with_capacity(capacity),
        }
    }
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.bubble_up(self.items.len() - 1);
    }
    /// Removes and returns the item with the smallest `f`, or [None] if the heap is empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let root = self.items.pop();
        if !self.items.is_empty() {
            self.bubble_down(0);
        }
        root
    }
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn len(&self) -> usize {
        self.items.len()
    }
    /// Empties the heap, keeping its allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }
    /// The backing array in heap order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
    fn bubble_up(&mut self, mut child: usize) {
        while child > 0 {
            let parent = (child - 1) / 2;
            if self.items[child].f() < self.items[parent].f() {
                self.items.swap(child, parent);
                child = parent;
            } else {
                break;
            }
        }
    }
    fn bubble_down(&mut self, mut ix: usize) {
        let n = self.items.len();
        loop {
            let left = 2 * ix + 1;
            let right = left + 1;
            if left >= n {
                break;
            }
            let smaller = if right < n && self.items[right].f() < self.items[left].f() {
                right
            } else {
                left
            };
            if self.items[smaller].f() < self.items[ix].f() {
                self.items.swap(smaller, ix);
                ix = smaller;
            } else {
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn assert_heap_invariant(heap: &BinaryHeap<f64>) {
        let items = heap.as_slice();
        for i in 0..items.len() {
            for child in [2 * i + 1, 2 * i + 2] {
                if child < items.len() {
                    assert!(items[i] <= items[child], "{:?} violates heap order at {}", items, i);
                }
            }
        }
    }

    #[test]
    fn pops_in_sorted_order() {
        let mut heap = BinaryHeap::new();
        for v in [9.0, 4.0, 7.0, 2.0, 6.0] {
            heap.push(v);
        }
        let mut popped = Vec::new();
        while let Some(v) = heap.pop() {
            popped.push(v);
        }
        assert_eq!(popped, vec![2.0, 4.0, 6.0, 7.0, 9.0]);
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut heap: BinaryHeap<f64> = BinaryHeap::new();
        assert!(heap.is_empty());
        assert!(heap.pop().is_none());
        heap.push(1.0);
        assert_eq!(heap.pop(), Some(1.0));
        assert!(heap.pop().is_none());
        assert!(heap.peek().is_none());
    }

    #[test]
    fn invariant_holds_under_random_operations() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut heap = BinaryHeap::with_capacity(64);
        let mut reference: Vec<f64> = Vec::new();
        for _ in 0..5000 {
            if rng.gen_bool(0.6) {
                // Small value range to get plenty of ties.
                let v = rng.gen_range(0..50) as f64 / 2.0;
                heap.push(v);
                reference.push(v);
            } else {
                let popped = heap.pop();
                let expected = reference
                    .iter()
                    .cloned()
                    .enumerate()
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(i, v)| {
                        reference.swap_remove(i);
                        v
                    });
                assert_eq!(popped, expected);
            }
            assert_heap_invariant(&heap);
            assert_eq!(heap.len(), reference.len());
        }
    }

    #[test]
    fn clear_keeps_heap_usable() {
        let mut heap = BinaryHeap::new();
        heap.push(3.0);
        heap.push(1.0);
        heap.clear();
        assert!(heap.is_empty());
        heap.push(5.0);
        assert_eq!(heap.peek(), Some(&5.0));
    }
}
