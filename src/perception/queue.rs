//! Perception queue
//!
//! Producers (the NLU mapping layer, test harnesses, other threads) hold a
//! cloneable `PerceptionSender`. The agent owns the only receiver and drains
//! it without blocking, strictly in arrival order.

use crate::perception::event::PerceptionEvent;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Cloneable producer handle
#[derive(Debug, Clone)]
pub struct PerceptionSender {
    tx: UnboundedSender<PerceptionEvent>,
}

impl PerceptionSender {
    /// Enqueue without blocking. Returns false if the agent is gone.
    pub fn push(&self, event: PerceptionEvent) -> bool {
        match self.tx.send(event) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    "Dropping {} from {}: agent no longer listening",
                    err.0.event_type(),
                    err.0.source_id()
                );
                false
            }
        }
    }
}

/// Single-consumer FIFO of perception events
#[derive(Debug)]
pub struct PerceptionSystem {
    tx: UnboundedSender<PerceptionEvent>,
    rx: UnboundedReceiver<PerceptionEvent>,
}

impl PerceptionSystem {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self { tx, rx }
    }

    pub fn enqueue(&self, event: PerceptionEvent) {
        if let Err(err) = self.tx.send(event) {
            tracing::trace!("Queue closed, dropping {}", err.0.event_type());
        }
    }

    pub fn sender(&self) -> PerceptionSender {
        PerceptionSender { tx: self.tx.clone() }
    }

    pub fn try_dequeue(&mut self) -> Option<PerceptionEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }
}

impl Default for PerceptionSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perception::event::PerceptionEventType;

    fn event(t: PerceptionEventType, ts: f64) -> PerceptionEvent {
        PerceptionEvent::new(t, "User", 0.5, "test", ts)
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = PerceptionSystem::new();
        queue.enqueue(event(PerceptionEventType::Greeting, 1.0));
        queue.enqueue(event(PerceptionEventType::Praise, 2.0));
        queue.enqueue(event(PerceptionEventType::Farewell, 3.0));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.try_dequeue().unwrap().event_type(), PerceptionEventType::Greeting);
        assert_eq!(queue.try_dequeue().unwrap().event_type(), PerceptionEventType::Praise);
        assert_eq!(queue.try_dequeue().unwrap().event_type(), PerceptionEventType::Farewell);
        assert!(queue.try_dequeue().is_none());
        assert!(queue.is_empty());
    }

    #[test]
    fn test_sender_from_other_thread() {
        let mut queue = PerceptionSystem::new();
        let sender = queue.sender();

        let handle = std::thread::spawn(move || {
            for i in 0..10 {
                assert!(sender.push(event(PerceptionEventType::InfoRequest, i as f64)));
            }
        });
        handle.join().unwrap();

        let mut stamps = Vec::new();
        while let Some(ev) = queue.try_dequeue() {
            stamps.push(ev.timestamp());
        }
        assert_eq!(stamps, (0..10).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_push_after_drop_reports_failure() {
        let queue = PerceptionSystem::new();
        let sender = queue.sender();
        drop(queue);
        assert!(!sender.push(event(PerceptionEventType::Greeting, 0.0)));
    }
}
