// src/models/rotate_line.rs
//
// The chain of segments. Only the active node animates and only the active
// node is drawn; the active node moves on once its turn settles, bouncing
// back at either end of the line.

use super::node::{Neighbor, Node, Traversal};
use super::NODE_COUNT;
use crate::animation::{StartOutcome, StepOutcome};
use crate::render::{Stroke, StrokeStyle, Surface};
use log::{debug, info};

#[derive(Debug, Clone)]
pub struct RotateLine {
    nodes: Vec<Node>,
    active: usize,
    traversal: Traversal,
}

impl Default for RotateLine {
    fn default() -> Self {
        Self::new()
    }
}

impl RotateLine {
    pub fn new() -> Self {
        Self {
            nodes: (0..NODE_COUNT).map(|i| Node::new(i, NODE_COUNT)).collect(),
            active: 0,
            traversal: Traversal::Forward,
        }
    }

    pub fn start_updating(&mut self) -> StartOutcome {
        self.nodes[self.active].start_updating()
    }

    /// Advances the active node. When it settles the line moves to the
    /// neighbor in the current traversal direction, flipping the direction
    /// at the ends, and reports `Settled`.
    pub fn update(&mut self) -> StepOutcome {
        let outcome = self.nodes[self.active].update();
        if outcome != StepOutcome::Settled {
            return outcome;
        }

        let settled = self.active;
        self.active = match self.nodes[settled].get_next(self.traversal) {
            Neighbor::Node(index) => index,
            Neighbor::Boundary(index) => {
                self.traversal = self.traversal.flipped();
                info!(
                    "Node {} is at the end of the line, now heading {:?}",
                    index, self.traversal
                );
                index
            }
        };
        debug!("Node {} settled, active node is {}", settled, self.active);
        outcome
    }

    pub fn draw(&self, surface: &Surface, style: StrokeStyle) -> Stroke {
        Stroke {
            style,
            segment: self.active_node().draw(surface),
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_node(&self) -> &Node {
        &self.nodes[self.active]
    }

    pub fn traversal(&self) -> Traversal {
        self.traversal
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
}
