//! Bounded FIFO log of interactions
//!
//! Recency, not relevance, governs retention: once full, every insert drops
//! the oldest record.

use crate::core::types::SourceId;
use crate::emotion::state::EmotionalState;
use crate::memory::record::MemoryRecord;
use crate::perception::event::PerceptionEvent;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct RelationalMemory {
    capacity: usize,
    records: VecDeque<MemoryRecord>,
}

impl RelationalMemory {
    /// `capacity` of zero is treated as one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            records: VecDeque::with_capacity(capacity),
        }
    }

    pub fn add_record(&mut self, event: PerceptionEvent, emotion: &EmotionalState, relation_impact: f32) {
        if self.records.len() >= self.capacity {
            self.records.pop_front();
        }
        self.records.push_back(MemoryRecord::new(event, emotion, relation_impact));
    }

    /// Oldest first
    pub fn records(&self) -> impl DoubleEndedIterator<Item = &MemoryRecord> {
        self.records.iter()
    }

    pub fn records_for<'a>(
        &'a self,
        entity: &'a SourceId,
    ) -> impl DoubleEndedIterator<Item = &'a MemoryRecord> {
        self.records.iter().filter(move |r| r.event.source_id() == entity)
    }

    pub fn latest(&self) -> Option<&MemoryRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perception::event::PerceptionEventType;

    fn event(source: &str, ts: f64) -> PerceptionEvent {
        PerceptionEvent::new(PerceptionEventType::Greeting, source, 0.5, "", ts)
    }

    #[test]
    fn test_fifo_eviction() {
        let mut memory = RelationalMemory::new(3);
        let emo = EmotionalState::default();
        for i in 1..=5 {
            memory.add_record(event("User", i as f64), &emo, 0.0);
            assert!(memory.len() <= 3);
        }

        let stamps: Vec<f64> = memory.records().map(|r| r.timestamp).collect();
        assert_eq!(stamps, vec![3.0, 4.0, 5.0]);
        assert_eq!(memory.latest().unwrap().timestamp, 5.0);
    }

    #[test]
    fn test_records_for_filters_by_source() {
        let mut memory = RelationalMemory::new(10);
        let emo = EmotionalState::default();
        memory.add_record(event("User", 1.0), &emo, 0.1);
        memory.add_record(event("Guest", 2.0), &emo, 0.2);
        memory.add_record(event("User", 3.0), &emo, 0.3);

        let user = SourceId::from("User");
        let impacts: Vec<f32> = memory.records_for(&user).map(|r| r.relation_impact).collect();
        assert_eq!(impacts, vec![0.1, 0.3]);
    }

    #[test]
    fn test_zero_capacity_holds_one() {
        let mut memory = RelationalMemory::new(0);
        let emo = EmotionalState::default();
        memory.add_record(event("User", 1.0), &emo, 0.0);
        memory.add_record(event("User", 2.0), &emo, 0.0);
        assert_eq!(memory.capacity(), 1);
        assert_eq!(memory.len(), 1);
        assert_eq!(memory.latest().unwrap().timestamp, 2.0);
    }
}
