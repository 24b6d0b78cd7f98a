//! Step-by-step sift-up heap build.
//!
//! A pass walks the store with three indices instead of recursion: `cursor`
//! is the node being promoted, `pivot` its comparison partner and `frontier`
//! the last node introduced into the pass. Every step does a small amount of
//! work and asks the host to call back after the configured delay, so a
//! human can follow along:
//!
//! ```text
//! Comparing --(pivot < cursor)--> Swapping --> Advancing --> Comparing | Done
//!     \--(pivot >= cursor)--> Skipping ---------------> Comparing | Done
//! ```

use crate::config::Config;
use crate::heap::HeapStore;
use crate::host::Host;

/// Comparison partner of `cursor`. Odd and even cursors take separate
/// branches: `cursor / 2` and `cursor / 2 - 1`. `cursor` must be non-zero.
pub fn pivot_of(cursor: usize) -> usize {
    if cursor % 2 == 1 {
        cursor / 2
    } else {
        cursor / 2 - 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiftState {
    pub pivot: usize,
    pub cursor: usize,
    pub frontier: usize,
}

impl SiftState {
    pub fn start() -> Self {
        Self {
            pivot: 0,
            cursor: 1,
            frontier: 1,
        }
    }

    /// Moves the cursor up to the pivot. Once the root is reached the next
    /// unvisited node is pulled in from the frontier.
    pub fn advance(&mut self) {
        self.cursor = self.pivot;
        if self.cursor == 0 {
            self.frontier += 1;
            self.cursor = self.frontier;
        }
        self.pivot = pivot_of(self.cursor);
    }

    pub fn is_finished(&self, len: usize) -> bool {
        self.cursor >= len
    }
}

/// What the next call to [`SiftMachine::step`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// Highlight pivot and cursor and decide between swapping and skipping.
    Comparing,
    /// Exchange the highlighted pair and start their transitions.
    Swapping,
    /// Pair already ordered: clear the highlight and move to the next node.
    Skipping,
    /// Swap transitions are over: clear the highlight and follow the node up.
    Advancing,
    Done,
}

#[derive(Debug)]
pub struct SiftMachine {
    state: SiftState,
    phase: Phase,
    steps: usize,
}

impl Default for SiftMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SiftMachine {
    pub fn new() -> Self {
        Self {
            state: SiftState::start(),
            phase: Phase::Idle,
            steps: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> SiftState {
        self.state
    }

    /// Steps executed by the current or last pass.
    pub fn step_count(&self) -> usize {
        self.steps
    }

    pub fn is_running(&self) -> bool {
        !matches!(self.phase, Phase::Idle | Phase::Done)
    }

    /// Starts a pass over `heap`. Returns `false` without doing anything when
    /// a pass is already running or there is nothing to order.
    pub fn start<H: Host>(&mut self, heap: &mut HeapStore, host: &mut H, config: &Config) -> bool {
        if self.is_running() {
            return false;
        }
        if heap.len() <= 1 {
            debug!("Nothing to build for {} node(s)", heap.len());
            self.phase = Phase::Done;
            return false;
        }
        debug!("Starting build over {} nodes", heap.len());
        self.state = SiftState::start();
        self.steps = 0;
        self.phase = Phase::Comparing;
        self.step(heap, host, config);
        true
    }

    /// Runs one step. Returns `false` if there was nothing to do.
    pub fn step<H: Host>(&mut self, heap: &mut HeapStore, host: &mut H, config: &Config) -> bool {
        trace!(
            "Step {}: {:?} pivot {} cursor {} frontier {}",
            self.steps,
            self.phase,
            self.state.pivot,
            self.state.cursor,
            self.state.frontier,
        );
        match self.phase {
            Phase::Idle | Phase::Done => return false,
            Phase::Comparing => {
                self.toggle_highlight(heap, host);
                let nodes = heap.nodes();
                let ordered = nodes[self.state.pivot].value() >= nodes[self.state.cursor].value();
                self.phase = if ordered { Phase::Skipping } else { Phase::Swapping };
                host.schedule_after(config.step_delay);
            }
            Phase::Swapping => {
                self.swap(heap, host, config);
                self.phase = Phase::Advancing;
                host.schedule_after(config.step_delay);
            }
            Phase::Skipping => {
                self.toggle_highlight(heap, host);
                self.state.pivot = 0;
                self.advance(heap, host, config);
            }
            Phase::Advancing => {
                let nodes = heap.nodes_mut();
                for i in [self.state.pivot, self.state.cursor] {
                    let node = &mut nodes[i];
                    node.current = node.target;
                }
                self.toggle_highlight(heap, host);
                self.advance(heap, host, config);
            }
        }
        self.steps += 1;
        true
    }

    fn advance<H: Host>(&mut self, heap: &HeapStore, host: &mut H, config: &Config) {
        self.state.advance();
        if self.state.is_finished(heap.len()) {
            debug!("Build finished after {} steps: {:?}", self.steps + 1, heap.values());
            self.phase = Phase::Done;
        } else {
            self.phase = Phase::Comparing;
            host.schedule_after(config.step_delay);
        }
    }

    /// Writes the inverse of the cursor's pair onto both pivot and cursor.
    fn toggle_highlight<H: Host>(&self, heap: &mut HeapStore, host: &mut H) {
        let SiftState { pivot, cursor, .. } = self.state;
        let nodes = heap.nodes_mut();
        let colors = nodes[cursor].colors.inverted();
        for i in [pivot, cursor] {
            nodes[i].colors = colors;
            host.paint_node(nodes[i].id(), colors);
        }
    }

    fn swap<H: Host>(&self, heap: &mut HeapStore, host: &mut H, config: &Config) {
        let SiftState { pivot, cursor, .. } = self.state;
        let tween = config.swap_tween();
        let nodes = heap.nodes_mut();
        let pivot_slot = nodes[pivot].target;
        let cursor_slot = nodes[cursor].target;

        // Animate towards the targets rather than the live positions, which
        // may still be mid-transition.
        host.animate_to(nodes[cursor].id(), nodes[cursor].current, pivot_slot, tween);
        host.animate_to(nodes[pivot].id(), nodes[pivot].current, cursor_slot, tween);

        nodes.swap(pivot, cursor);
        nodes[pivot].target = pivot_slot;
        nodes[cursor].target = cursor_slot;
        trace!("Swapped {} and {}", nodes[pivot].value(), nodes[cursor].value());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::HeadlessHost;
    use crate::layout::Size;
    use crate::node::ColorPair;

    const CANVAS: Size = Size::new(800.0, 600.0);

    fn store(values: &[i64], host: &mut HeadlessHost) -> HeapStore {
        let mut heap = HeapStore::new(CANVAS);
        for &v in values {
            heap.insert(v, host);
        }
        heap
    }

    #[test]
    fn test_pivot_of() {
        assert_eq!(pivot_of(1), 0);
        assert_eq!(pivot_of(2), 0);
        assert_eq!(pivot_of(3), 1);
        assert_eq!(pivot_of(4), 1);
        assert_eq!(pivot_of(5), 2);
        assert_eq!(pivot_of(6), 2);
        assert_eq!(pivot_of(9), 4);
    }

    #[test]
    fn test_advance_from_root_moves_frontier() {
        let mut state = SiftState::start();
        state.advance();
        assert_eq!(state, SiftState { pivot: 0, cursor: 2, frontier: 2 });
        state.advance();
        assert_eq!(state, SiftState { pivot: 1, cursor: 3, frontier: 3 });
        // Following a swap up the tree keeps the frontier.
        state.advance();
        assert_eq!(state, SiftState { pivot: 0, cursor: 1, frontier: 3 });
        assert!(!state.is_finished(4));
        state.advance();
        assert_eq!(state.cursor, 4);
        assert!(state.is_finished(4));
    }

    #[test]
    fn test_compare_then_swap_then_advance() {
        let config = Config::default();
        let mut host = HeadlessHost::new(CANVAS);
        let mut heap = store(&[1, 2], &mut host);
        let mut sift = SiftMachine::new();

        assert!(sift.start(&mut heap, &mut host, &config));
        assert_eq!(sift.phase(), Phase::Swapping);
        assert!(heap.nodes().iter().all(|n| n.colors == ColorPair::HIGHLIGHTED));
        assert_eq!(host.pending(), Some(config.step_delay));

        let root_slot = heap.nodes()[0].target;
        let child_slot = heap.nodes()[1].target;
        assert!(sift.step(&mut heap, &mut host, &config));
        assert_eq!(vec![2, 1], heap.values());
        assert_eq!(heap.nodes()[0].target, root_slot);
        assert_eq!(heap.nodes()[1].target, child_slot);
        assert_eq!(sift.phase(), Phase::Advancing);
        assert_eq!(host.transitions().len(), 2);

        assert!(sift.step(&mut heap, &mut host, &config));
        assert_eq!(sift.phase(), Phase::Done);
        assert!(heap.nodes().iter().all(|n| n.colors == ColorPair::NORMAL && n.is_settled()));
        assert_eq!(sift.step_count(), 3);
        assert!(!sift.step(&mut heap, &mut host, &config));
    }

    #[test]
    fn test_equal_values_are_not_swapped() {
        let config = Config::default();
        let mut host = HeadlessHost::new(CANVAS);
        let mut heap = store(&[4, 4], &mut host);
        let ids: Vec<_> = heap.nodes().iter().map(|n| n.id()).collect();
        let mut sift = SiftMachine::new();
        sift.start(&mut heap, &mut host, &config);
        assert_eq!(sift.phase(), Phase::Skipping);
        sift.step(&mut heap, &mut host, &config);
        assert_eq!(sift.phase(), Phase::Done);
        let after: Vec<_> = heap.nodes().iter().map(|n| n.id()).collect();
        assert_eq!(ids, after);
        assert!(host.transitions().is_empty());
    }

    #[test]
    fn test_single_node_is_noop() {
        let config = Config::default();
        let mut host = HeadlessHost::new(CANVAS);
        let mut heap = store(&[7], &mut host);
        let mut sift = SiftMachine::new();
        assert!(!sift.start(&mut heap, &mut host, &config));
        assert!(!sift.is_running());
        assert_eq!(host.pending(), None);
        assert_eq!(vec![7], heap.values());
    }

    #[test]
    fn test_start_while_running_is_rejected() {
        let config = Config::default();
        let mut host = HeadlessHost::new(CANVAS);
        let mut heap = store(&[1, 2, 3], &mut host);
        let mut sift = SiftMachine::new();
        assert!(sift.start(&mut heap, &mut host, &config));
        let state = sift.state();
        assert!(!sift.start(&mut heap, &mut host, &config));
        assert_eq!(state, sift.state());
        assert_eq!(sift.step_count(), 1);
    }
}
