//! Animated sift-up construction of a binary max-heap.
//!
//! Values are inserted into a [`HeapStore`], laid out as a complete binary
//! tree by [`layout::position`], and reordered by a [`SiftMachine`] one
//! visible step at a time. Rendering, transitions and timers are provided by
//! the embedding application through the traits in [`host`].

#[macro_use]
extern crate log;

pub mod config;
pub mod easing;
pub mod error;
pub mod headless;
pub mod heap;
pub mod host;
pub mod layout;
pub mod node;
pub mod sift;
pub mod visualizer;

pub use crate::config::Config;
pub use crate::easing::{Easing, Tween};
pub use crate::error::Error;
pub use crate::heap::HeapStore;
pub use crate::host::{Animator, Host, Scheduler, Surface};
pub use crate::layout::{Point, Size};
pub use crate::node::{Color, ColorPair, HeapNode, NodeId};
pub use crate::sift::{Phase, SiftMachine, SiftState};
pub use crate::visualizer::Visualizer;
