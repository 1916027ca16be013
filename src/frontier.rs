use crate::node::NodeId;

/// A frontier entry: total cost plus the arena id of the node it ranks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub cost: u32,
    pub node: NodeId,
}

/// Array-backed binary min-heap; children of slot `i` sit at `2i + 1` and `2i + 2`.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: Vec<FrontierEntry>,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, cost: u32, node: NodeId) {
        self.heap.push(FrontierEntry { cost, node });
        self.sift_up(self.heap.len() - 1);
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove and return a minimum-cost entry.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some(last);
        }
        let min = std::mem::replace(&mut self.heap[0], last);
        self.sift_down(0);
        Some(min)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the frontier reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[index].cost >= self.heap[parent].cost {
                break;
            }
            self.heap.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;

            // Smaller child; the left one wins ties.
            let candidate = if right < len && self.heap[right].cost < self.heap[left].cost {
                Some(right)
            } else if left < len {
                Some(left)
            } else {
                None
            };

            match candidate {
                Some(child) if self.heap[child].cost < self.heap[index].cost => {
                    self.heap.swap(index, child);
                    index = child;
                }
                _ => break,
            }
        }
    }

    #[cfg(test)]
    fn satisfies_heap_property(&self) -> bool {
        (1..self.heap.len()).all(|i| self.heap[(i - 1) / 2].cost <= self.heap[i].cost)
    }
}
