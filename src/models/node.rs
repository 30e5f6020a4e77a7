// src/models/node.rs
//
// One segment of the line. Neighbors are stored as indices into the
// owning RotateLine, so the chain has no reference cycles.

use crate::animation::{RotationState, StartOutcome, StepOutcome};
use crate::render::{Segment, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Forward,
    Backward,
}

impl Traversal {
    pub fn flipped(self) -> Self {
        match self {
            Traversal::Forward => Traversal::Backward,
            Traversal::Backward => Traversal::Forward,
        }
    }

    pub fn sign(self) -> i32 {
        match self {
            Traversal::Forward => 1,
            Traversal::Backward => -1,
        }
    }
}

/// Result of asking a node for its neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Neighbor {
    Node(usize),
    // no neighbor that way; traversal stays on this index
    Boundary(usize),
}

#[derive(Debug, Clone)]
pub struct Node {
    index: usize,
    prev: Option<usize>,
    next: Option<usize>,
    pub state: RotationState,
}

impl Node {
    pub fn new(index: usize, count: usize) -> Self {
        Self {
            index,
            prev: index.checked_sub(1),
            next: (index + 1 < count).then_some(index + 1),
            state: RotationState::new(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn start_updating(&mut self) -> StartOutcome {
        self.state.start_updating()
    }

    pub fn update(&mut self) -> StepOutcome {
        self.state.update()
    }

    pub fn get_next(&self, traversal: Traversal) -> Neighbor {
        let neighbor = match traversal {
            Traversal::Forward => self.next,
            Traversal::Backward => self.prev,
        };
        match neighbor {
            Some(index) => Neighbor::Node(index),
            None => Neighbor::Boundary(self.index),
        }
    }

    pub fn draw(&self, surface: &Surface) -> Segment {
        surface.segment(self.index, self.state.scale())
    }
}
