//! Capabilities the engine needs from its environment.
//!
//! The engine never renders, animates or waits by itself. It tells a
//! [`Surface`] where nodes go, asks an [`Animator`] to move them, and asks a
//! [`Scheduler`] to call [`Visualizer::step`](crate::Visualizer::step) back
//! after a delay.

use std::time::Duration;

use crate::easing::Tween;
use crate::layout::{Point, Size};
use crate::node::{ColorPair, HeapNode, NodeId};

pub trait Surface {
    /// Current renderable area.
    fn size(&self) -> Size;

    fn add_node(&mut self, node: &HeapNode);

    fn clear_nodes(&mut self);

    /// Move a node instantly.
    fn place_node(&mut self, id: NodeId, pos: Point);

    fn paint_node(&mut self, id: NodeId, colors: ColorPair);
}

pub trait Animator {
    /// Start moving `id` from `from` to `to`. Must not block; the engine does
    /// not wait for completion.
    fn animate_to(&mut self, id: NodeId, from: Point, to: Point, tween: Tween);
}

pub trait Scheduler {
    /// Call `Visualizer::step` once after `delay`.
    fn schedule_after(&mut self, delay: Duration);
}

pub trait Host: Surface + Animator + Scheduler {}

impl<T: Surface + Animator + Scheduler> Host for T {}
