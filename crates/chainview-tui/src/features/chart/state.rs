//! Size chart state: the last N (height, size) samples.

use std::collections::VecDeque;

/// Bounded history of block sizes, oldest first.
#[derive(Debug)]
pub struct SizeChartState {
    points: VecDeque<(u64, u64)>,
    capacity: usize,
}

impl SizeChartState {
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::new(),
            capacity: capacity.max(2),
        }
    }

    /// Records a block's size. A sample at an already-present height
    /// replaces the old one (tip replacement); otherwise the oldest sample
    /// is dropped once the capacity is reached.
    pub fn record(&mut self, height: u64, size: u64) {
        if let Some(last) = self.points.back_mut()
            && last.0 == height
        {
            last.1 = size;
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back((height, size));
    }

    pub fn points(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
