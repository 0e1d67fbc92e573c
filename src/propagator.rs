use crate::events::Listeners;
use crate::store::Store;

pub struct PropagatorControlBlock {
    pub queued: bool,
    pub id: usize,
}

impl PropagatorControlBlock {
    pub fn new(id: usize) -> Self {
        Self { queued: false, id }
    }
}

pub trait Propagator {
    /// Subscribes itself to all required events.
    fn listen(&self, listeners: &mut Listeners);

    /// Narrows domains in `store`; signals failure through `store.fail()`.
    fn propagate(&mut self, store: &mut Store);

    fn get_cb(&self) -> &PropagatorControlBlock;

    fn get_cb_mut(&mut self) -> &mut PropagatorControlBlock;

    fn enqueue(&mut self) {
        self.get_cb_mut().queued = true;
    }

    fn dequeue(&mut self) {
        self.get_cb_mut().queued = false;
    }

    fn is_queued(&self) -> bool {
        self.get_cb().queued
    }

    fn get_id(&self) -> usize {
        self.get_cb().id
    }
}
