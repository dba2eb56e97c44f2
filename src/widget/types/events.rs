/// Events a die dispatches to its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DieEvent {
    /// An accepted user roll landed on this face
    Selection(u32),
}

impl DieEvent {
    /// DOM event type used when dispatching on a host element.
    pub fn name(&self) -> &'static str {
        match self {
            DieEvent::Selection(_) => "selection",
        }
    }

    pub fn value(&self) -> u32 {
        match self {
            DieEvent::Selection(value) => *value,
        }
    }
}
