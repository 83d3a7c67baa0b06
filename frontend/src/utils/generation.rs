use std::{cell::Cell, rc::Rc};

/// Monotonic request stamp. A response is applied only if its ticket is
/// still the latest one issued.
#[derive(Clone, Default)]
pub struct Generation {
    current: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl Generation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> Ticket {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.get() == ticket.0
    }
}
