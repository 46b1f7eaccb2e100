use crate::config::*;
use bevy::prelude::*;
use rand::Rng;

/// A point in the MindSpace network
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub activity: f32,
    pub phase: f32,
}

impl Node {
    /// Creates a node placed uniformly inside `bounds` (surface space, origin top-left)
    pub fn random<R: Rng>(rng: &mut R, bounds: Vec2) -> Self {
        // Zero-sized surfaces place every node at the origin.
        let x = rng.gen_range(0.0f32..=1.0) * bounds.x.max(0.0);
        let y = rng.gen_range(0.0f32..=1.0) * bounds.y.max(0.0);

        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::new(
                rng.gen_range(-MAX_NODE_SPEED..=MAX_NODE_SPEED),
                rng.gen_range(-MAX_NODE_SPEED..=MAX_NODE_SPEED),
            ),
            radius: rng.gen_range(MIN_NODE_RADIUS..=MAX_NODE_RADIUS),
            activity: rng.gen_range(0.0..=1.0),
            phase: 0.0,
        }
    }

    /// Moves the node one frame and bounces it off the surface edges.
    ///
    /// Positions are not clamped, so a node may sit up to one frame's travel
    /// outside the surface before heading back in.
    pub fn advance(&mut self, bounds: Vec2) {
        self.position += self.velocity;

        if self.position.x < 0.0 || self.position.x > bounds.x {
            self.velocity.x = -self.velocity.x;
        }
        if self.position.y < 0.0 || self.position.y > bounds.y {
            self.velocity.y = -self.velocity.y;
        }
    }

    /// Recomputes activity from the clock and steps the phase
    pub fn pulse(&mut self, now_ms: f64) {
        let angle = now_ms * ACTIVITY_TIME_SCALE + self.phase as f64;
        self.activity = (angle.sin() * 0.5 + 0.5).clamp(0.0, 1.0) as f32;
        self.phase += PHASE_STEP;
    }

    pub fn is_active(&self) -> bool {
        self.activity > ACTIVE_THRESHOLD
    }
}

/// Directed, weighted link between two nodes (indices into the node list)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub from: usize,
    pub to: usize,
    pub strength: f32,
}

/// Aggregate figures recomputed after every tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetworkStats {
    pub active_nodes: usize,
    pub connections: usize,
    pub mean_activity_percent: f32,
}

/// The MindSpace particle network.
///
/// The node count is fixed between resets, so connection indices always point
/// at live nodes. Connections never change after they are created.
#[derive(Resource, Debug, Default, Clone)]
pub struct MindSpace {
    nodes: Vec<Node>,
    connections: Vec<Connection>,
    stats: NetworkStats,
}

impl MindSpace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh network of `node_count` nodes inside `bounds`.
    ///
    /// Each node draws between `MIN_OUT_DEGREE` and `MAX_OUT_DEGREE` random
    /// targets. Targets equal to the source are skipped rather than redrawn and
    /// duplicate edges are kept.
    pub fn initialize<R: Rng>(&mut self, node_count: usize, bounds: Vec2, rng: &mut R) {
        self.nodes.clear();
        self.connections.clear();

        self.nodes
            .extend((0..node_count).map(|_| Node::random(rng, bounds)));

        for from in 0..node_count {
            let out_degree = rng.gen_range(MIN_OUT_DEGREE..=MAX_OUT_DEGREE);
            for _ in 0..out_degree {
                let to = rng.gen_range(0..node_count);
                if to == from {
                    continue;
                }
                self.connections.push(Connection {
                    from,
                    to,
                    strength: rng.gen_range(0.0..=1.0),
                });
            }
        }

        self.refresh_stats();
    }

    /// Throws away every node and connection and builds a new network
    pub fn reset<R: Rng>(&mut self, node_count: usize, bounds: Vec2, rng: &mut R) {
        self.initialize(node_count, bounds, rng);
    }

    /// Advances every node by one animation frame
    pub fn tick(&mut self, bounds: Vec2, now_ms: f64) {
        for node in self.nodes.iter_mut() {
            node.advance(bounds);
            node.pulse(now_ms);
        }
        self.refresh_stats();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn stats(&self) -> NetworkStats {
        self.stats
    }

    /// Mutable access to node state; the node count itself stays fixed
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    fn refresh_stats(&mut self) {
        let active_nodes = self.nodes.iter().filter(|node| node.is_active()).count();
        let mean_activity_percent = if self.nodes.is_empty() {
            0.0
        } else {
            let total: f32 = self.nodes.iter().map(|node| node.activity).sum();
            total / self.nodes.len() as f32 * 100.0
        };

        self.stats = NetworkStats {
            active_nodes,
            connections: self.connections.len(),
            mean_activity_percent,
        };
    }
}
