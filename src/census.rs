use serde::{Deserialize, Serialize};

use crate::components::ElementKind;
use crate::world::PlacedElement;

/// Running per-kind placement counts, kept in step with the placement history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementCensus {
    counts: [u64; 9],
}

impl ElementCensus {
    pub fn from_history<'a>(history: impl IntoIterator<Item = &'a PlacedElement>) -> Self {
        let mut census = Self::default();
        for element in history {
            census.record(element.kind);
        }
        census
    }

    pub fn record(&mut self, kind: ElementKind) {
        self.counts[kind.index()] += 1;
    }

    pub fn count(&self, kind: ElementKind) -> u64 {
        self.counts[kind.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn clear(&mut self) {
        self.counts = [0; 9];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::{ElementId, Position};

    fn placed(seq: u64, kind: ElementKind) -> PlacedElement {
        PlacedElement {
            id: ElementId::new(seq),
            kind,
            position: Position::new(0.0, 1.0, 0.0),
            generation_placed: 1,
        }
    }

    #[test]
    fn recount_matches_incremental_records() {
        let history = vec![
            placed(0, ElementKind::Tree),
            placed(1, ElementKind::Factory),
            placed(2, ElementKind::Tree),
            placed(3, ElementKind::Healer),
        ];
        let mut running = ElementCensus::default();
        for element in &history {
            running.record(element.kind);
        }
        let recount = ElementCensus::from_history(&history);
        assert_eq!(running, recount);
        assert_eq!(recount.count(ElementKind::Tree), 2);
        assert_eq!(recount.count(ElementKind::River), 0);
        assert_eq!(recount.total(), 4);
    }

    #[test]
    fn clear_zeroes_every_kind() {
        let mut census = ElementCensus::default();
        census.record(ElementKind::Builder);
        census.clear();
        assert_eq!(census, ElementCensus::default());
    }
}
