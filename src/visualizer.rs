use crate::config::Config;
use crate::error::{self, Error};
use crate::heap::HeapStore;
use crate::host::Host;
use crate::node::NodeId;
use crate::sift::{Phase, SiftMachine};

/// One visualization session: the heap, the build pass running over it and
/// the host everything is drawn on.
///
/// Hosts call [`step`](Visualizer::step) whenever a delay requested through
/// [`Scheduler::schedule_after`](crate::host::Scheduler::schedule_after)
/// elapses.
pub struct Visualizer<H: Host> {
    heap: HeapStore,
    sift: SiftMachine,
    config: Config,
    host: H,
}

impl<H: Host> Visualizer<H> {
    pub fn new(host: H, config: Config) -> Self {
        Self {
            heap: HeapStore::new(host.size()),
            sift: SiftMachine::new(),
            config,
            host,
        }
    }

    /// Parses `raw` and appends it to the heap. Text that is not an integer
    /// is dropped without any other effect.
    pub fn insert(&mut self, raw: &str) {
        if let Err(e) = self.try_insert(raw) {
            debug!("Ignoring input: {}", e);
        }
    }

    pub fn try_insert(&mut self, raw: &str) -> Result<(), Error> {
        let value = error::parse_value(raw)?;
        self.insert_value(value);
        Ok(())
    }

    /// Returns `None` if a build pass is running, as the pass owns the node
    /// order until it finishes.
    pub fn insert_value(&mut self, value: i64) -> Option<NodeId> {
        if self.sift.is_running() {
            warn!("Not inserting {} while a build is running", value);
            return None;
        }
        Some(self.heap.insert(value, &mut self.host))
    }

    /// Starts a build pass. Returns `false` if one is already running or the
    /// heap has fewer than two nodes.
    pub fn build(&mut self) -> bool {
        self.sift.start(&mut self.heap, &mut self.host, &self.config)
    }

    pub fn clear(&mut self) {
        if self.sift.is_running() {
            warn!("Not clearing while a build is running");
            return;
        }
        self.heap.clear(&mut self.host);
        self.sift = SiftMachine::new();
    }

    /// Re-reads the surface size and snaps every node onto its slot.
    pub fn on_resize(&mut self) {
        self.heap.set_canvas(self.host.size());
        self.heap.relayout_all(&mut self.host);
    }

    /// Continuation for the host's scheduler.
    pub fn step(&mut self) -> bool {
        self.sift.step(&mut self.heap, &mut self.host, &self.config)
    }

    pub fn is_running(&self) -> bool {
        self.sift.is_running()
    }

    pub fn phase(&self) -> Phase {
        self.sift.phase()
    }

    pub fn sift(&self) -> &SiftMachine {
        &self.sift
    }

    pub fn store(&self) -> &HeapStore {
        &self.heap
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

#[cfg(test)]
mod tests {
    use super::Visualizer;
    use crate::config::Config;
    use crate::headless::{run_to_completion, HeadlessHost};
    use crate::layout::{position, Size};
    use crate::sift::Phase;

    fn visualizer() -> Visualizer<HeadlessHost> {
        Visualizer::new(HeadlessHost::new(Size::new(800.0, 600.0)), Config::default())
    }

    #[test]
    fn test_invalid_input_is_ignored() {
        let mut vis = visualizer();
        vis.insert("12");
        vis.insert("abc");
        vis.insert("");
        assert_eq!(vec![12], vis.store().values());
        assert!(vis.try_insert("1e3").is_err());
        assert_eq!(1, vis.store().len());
    }

    #[test]
    fn test_insert_and_clear_rejected_while_running() {
        let mut vis = visualizer();
        for v in ["1", "2", "3"] {
            vis.insert(v);
        }
        assert!(vis.build());
        assert!(!vis.build());
        assert_eq!(vis.insert_value(10), None);
        vis.clear();
        assert_eq!(3, vis.store().len());

        run_to_completion(&mut vis);
        assert_eq!(vis.phase(), Phase::Done);
        vis.clear();
        assert!(vis.store().is_empty());
        assert_eq!(vis.phase(), Phase::Idle);
        assert!(vis.insert_value(10).is_some());
    }

    #[test]
    fn test_resize_relayouts() {
        let mut vis = visualizer();
        vis.insert("3");
        vis.insert("6");
        let size = Size::new(400.0, 300.0);
        vis.host_mut().set_size(size);
        vis.on_resize();
        assert_eq!(vis.store().canvas(), size);
        for (i, node) in vis.store().nodes().iter().enumerate() {
            assert_eq!(node.target, position(i, 2, size));
            assert_eq!(vis.host().placed(node.id()), Some(node.target));
        }
    }
}
