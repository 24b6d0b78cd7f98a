//! In-memory host with a virtual clock.
//!
//! Records every capability call so tests can assert on the exact trace of a
//! build pass, and samples running transitions as the clock advances.

use std::collections::BTreeMap;
use std::time::Duration;

use crate::easing::Tween;
use crate::heap::HeapStore;
use crate::host::{Animator, Scheduler, Surface};
use crate::layout::{self, Point, Size};
use crate::node::{ColorPair, HeapNode, NodeId};
use crate::visualizer::Visualizer;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Added(NodeId, i64),
    Cleared,
    Placed(NodeId, Point),
    Painted(NodeId, ColorPair),
    Animated { id: NodeId, from: Point, to: Point },
    Scheduled(Duration),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedNode {
    pub value: i64,
    pub pos: Point,
    pub colors: ColorPair,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub id: NodeId,
    pub from: Point,
    pub to: Point,
    pub tween: Tween,
    pub started: Duration,
}

impl Transition {
    pub fn position_at(&self, clock: Duration) -> Point {
        let elapsed = clock.saturating_sub(self.started);
        self.tween.sample(self.from, self.to, elapsed)
    }

    pub fn is_finished(&self, clock: Duration) -> bool {
        clock.saturating_sub(self.started) >= self.tween.duration
    }
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    size: Size,
    clock: Duration,
    due: Option<Duration>,
    events: Vec<Event>,
    rendered: BTreeMap<NodeId, RenderedNode>,
    transitions: Vec<Transition>,
}

impl HeadlessHost {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn clock(&self) -> Duration {
        self.clock
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn rendered(&self) -> &BTreeMap<NodeId, RenderedNode> {
        &self.rendered
    }

    pub fn placed(&self, id: NodeId) -> Option<Point> {
        self.rendered.get(&id).map(|n| n.pos)
    }

    /// Transitions still in flight.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Time left until the pending step is due.
    pub fn pending(&self) -> Option<Duration> {
        self.due.map(|due| due.saturating_sub(self.clock))
    }

    /// Moves the virtual clock forward and repositions animated nodes.
    pub fn advance(&mut self, dt: Duration) {
        self.clock += dt;
        for t in &self.transitions {
            if let Some(node) = self.rendered.get_mut(&t.id) {
                node.pos = t.position_at(self.clock);
            }
        }
        let clock = self.clock;
        self.transitions.retain(|t| !t.is_finished(clock));
    }

    /// Consumes the pending step if it is due.
    pub fn fire_due(&mut self) -> bool {
        match self.due {
            Some(due) if due <= self.clock => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

impl Surface for HeadlessHost {
    fn size(&self) -> Size {
        self.size
    }

    fn add_node(&mut self, node: &HeapNode) {
        self.rendered.insert(
            node.id(),
            RenderedNode {
                value: node.value(),
                pos: node.current,
                colors: node.colors,
            },
        );
        self.events.push(Event::Added(node.id(), node.value()));
    }

    fn clear_nodes(&mut self) {
        self.rendered.clear();
        self.transitions.clear();
        self.events.push(Event::Cleared);
    }

    fn place_node(&mut self, id: NodeId, pos: Point) {
        if let Some(node) = self.rendered.get_mut(&id) {
            node.pos = pos;
        }
        self.transitions.retain(|t| t.id != id);
        self.events.push(Event::Placed(id, pos));
    }

    fn paint_node(&mut self, id: NodeId, colors: ColorPair) {
        if let Some(node) = self.rendered.get_mut(&id) {
            node.colors = colors;
        }
        self.events.push(Event::Painted(id, colors));
    }
}

impl Animator for HeadlessHost {
    fn animate_to(&mut self, id: NodeId, from: Point, to: Point, tween: Tween) {
        self.transitions.retain(|t| t.id != id);
        self.transitions.push(Transition {
            id,
            from,
            to,
            tween,
            started: self.clock,
        });
        self.events.push(Event::Animated { id, from, to });
    }
}

impl Scheduler for HeadlessHost {
    fn schedule_after(&mut self, delay: Duration) {
        self.due = Some(self.clock + delay);
        self.events.push(Event::Scheduled(delay));
    }
}

/// Drives the current build pass until nothing is scheduled any more.
/// Returns the number of steps fired by the clock.
pub fn run_to_completion(vis: &mut Visualizer<HeadlessHost>) -> usize {
    let mut fired = 0;
    while let Some(remaining) = vis.host().pending() {
        let host = vis.host_mut();
        host.advance(remaining);
        if host.fire_due() {
            vis.step();
            fired += 1;
        }
    }
    fired
}

/// Text picture of the tree, one line per level starting at the root.
/// Highlighted nodes are shown in brackets.
pub fn render_rows(heap: &HeapStore) -> Vec<String> {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for (i, node) in heap.nodes().iter().enumerate() {
        let level = layout::node_height(i) as usize - 1;
        if rows.len() <= level {
            rows.push(Vec::new());
        }
        let label = if node.colors.is_highlighted() {
            format!("[{}]", node.value())
        } else {
            node.value().to_string()
        };
        rows[level].push(label);
    }
    rows.into_iter().map(|r| r.join(" ")).collect()
}
