use crate::card::Card;
use crate::pairs::PairBounds;

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub theme: String,
    /// Position of `theme` in the registry, `None` for unknown themes
    pub theme_index: Option<usize>,
    pub theme_count: usize,
    pub pair_count: usize,
    pub bounds: PairBounds,
    pub cards: Vec<Card>,
    pub cursor: usize,
    pub revision: u64,
}

impl GameSnapshot {
    pub fn face_up_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_face_up()).count()
    }

    pub fn can_add_pair(&self) -> bool {
        self.bounds.contains(self.pair_count + 1)
    }

    pub fn can_remove_pair(&self) -> bool {
        self.pair_count > 0 && self.bounds.contains(self.pair_count - 1)
    }
}
