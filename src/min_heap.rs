use std::cmp::Ordering;

/// Array-backed binary min-heap. Ties are only stable if `cmp` breaks them.
pub struct MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    elements: Vec<T>,
    cmp: F,
}

impl<T, F> MinHeap<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    #[cfg(test)]
    pub fn new(cmp: F) -> Self {
        MinHeap {
            elements: Vec::new(),
            cmp,
        }
    }

    // bottom-up heapify, O(n)
    pub fn from_vec(elements: Vec<T>, cmp: F) -> Self {
        let mut heap = MinHeap { elements, cmp };
        for i in (0..heap.len() / 2).rev() {
            heap.sift_down(i);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn insert(&mut self, value: T) {
        self.elements.push(value);
        self.sift_up(self.elements.len() - 1);
    }

    pub fn extract_min(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let min = self.elements.pop();
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        min
    }

    fn less(&self, a: usize, b: usize) -> bool {
        (self.cmp)(&self.elements[a], &self.elements[b]) == Ordering::Less
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if !self.less(i, parent) {
                break;
            }
            self.elements.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.elements.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < n && self.less(left, smallest) {
                smallest = left;
            }
            if right < n && self.less(right, smallest) {
                smallest = right;
            }
            if smallest == i {
                return;
            }
            self.elements.swap(i, smallest);
            i = smallest;
        }
    }
}
