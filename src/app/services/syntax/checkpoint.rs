use syntect::highlighting::HighlightState;
use syntect::parsing::ParseState;

pub const CHECKPOINT_INTERVAL: usize = 128;

/// Parse and highlight states saved every CHECKPOINT_INTERVAL lines, so an
/// edit only re-parses from the last checkpoint at or before it.
#[derive(Clone, Default)]
pub struct SparseCheckpoints {
    parse_states: Vec<ParseState>,
    highlight_states: Vec<HighlightState>,
}

impl SparseCheckpoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.parse_states.clear();
        self.highlight_states.clear();
    }

    pub fn len(&self) -> usize {
        self.parse_states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parse_states.is_empty()
    }

    /// Record the states in effect before line `len() * CHECKPOINT_INTERVAL`.
    pub fn push(&mut self, parse_state: ParseState, highlight_state: HighlightState) {
        self.parse_states.push(parse_state);
        self.highlight_states.push(highlight_state);
    }

    /// Drop every checkpoint after `idx`.
    pub fn truncate_after(&mut self, idx: usize) {
        self.parse_states.truncate(idx + 1);
        self.highlight_states.truncate(idx + 1);
    }

    pub fn get(&self, idx: usize) -> Option<(ParseState, HighlightState)> {
        Some((
            self.parse_states.get(idx)?.clone(),
            self.highlight_states.get(idx)?.clone(),
        ))
    }

    /// Checkpoint covering `line`.
    pub fn checkpoint_index(line: usize) -> usize {
        line / CHECKPOINT_INTERVAL
    }

    /// First line covered by checkpoint `idx`.
    pub fn checkpoint_line(idx: usize) -> usize {
        idx * CHECKPOINT_INTERVAL
    }

    pub fn is_checkpoint_line(line: usize) -> bool {
        line % CHECKPOINT_INTERVAL == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_checkpoint_mapping() {
        assert_eq!(SparseCheckpoints::checkpoint_index(0), 0);
        assert_eq!(SparseCheckpoints::checkpoint_index(127), 0);
        assert_eq!(SparseCheckpoints::checkpoint_index(128), 1);
        assert_eq!(SparseCheckpoints::checkpoint_line(2), 256);
        assert!(SparseCheckpoints::is_checkpoint_line(384));
        assert!(!SparseCheckpoints::is_checkpoint_line(385));
    }
}
