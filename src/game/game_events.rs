//! Change notifications pushed by the game orchestrator.
//!
//! Dispatch is a synchronous loop over subscribers in subscription order.
//! Observers must not call back into mutating `ChessGame` commands.

use crate::game_state::chess_types::{GameState, Piece, Side, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    GameStateChanged { old: GameState, new: GameState },
    SideToMoveChanged { old: Side, new: Side },
    /// Squares whose contents changed, for partial redraws.
    SquaresChanged(Vec<Square>),
    PieceCaptured { piece: Piece, square: Square },
    /// New flag values for `side` after a change.
    CastlingRightsChanged {
        side: Side,
        queenside: bool,
        kingside: bool,
    },
}

/// Receiver of game events.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Ordered set of observers.
#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    observers: Vec<(SubscriptionId, Box<dyn GameObserver>)>,
}

impl EventBus {
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }

    pub fn publish(&mut self, event: GameEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer.on_event(&event);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn publish_reaches_subscribers_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut bus = EventBus::default();

        let first = Rc::clone(&seen);
        bus.subscribe(Box::new(move |e: &GameEvent| first.borrow_mut().push((1, e.clone()))));
        let second = Rc::clone(&seen);
        let id = bus.subscribe(Box::new(move |e: &GameEvent| second.borrow_mut().push((2, e.clone()))));

        let event = GameEvent::SideToMoveChanged {
            old: Side::White,
            new: Side::Black,
        };
        bus.publish(event.clone());
        assert_eq!(*seen.borrow(), vec![(1, event.clone()), (2, event.clone())]);

        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(event.clone());
        assert_eq!(seen.borrow().len(), 3);
        assert_eq!(bus.len(), 1);
    }

    struct Counter(usize);

    impl GameObserver for Counter {
        fn on_event(&mut self, _event: &GameEvent) {
            self.0 += 1;
        }
    }

    #[test]
    fn struct_observers_work_too() {
        let mut counter = Counter(0);
        counter.on_event(&GameEvent::SquaresChanged(Vec::new()));
        assert_eq!(counter.0, 1);

        let mut bus = EventBus::default();
        assert!(bus.is_empty());
        bus.subscribe(Box::new(Counter(0)));
        bus.publish(GameEvent::SquaresChanged(Vec::new()));
        assert!(!bus.is_empty());
    }
}
