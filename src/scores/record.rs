//! Derived score statistics

/// How many recent games the trailing average covers
pub const RECENT_WINDOW: usize = 10;

/// Try-counts of won games, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreRecord {
    tries: Vec<u32>,
}

impl ScoreRecord {
    #[must_use]
    pub const fn new(tries: Vec<u32>) -> Self {
        Self { tries }
    }

    pub fn push(&mut self, tries: u32) {
        self.tries.push(tries);
    }

    #[must_use]
    pub fn entries(&self) -> &[u32] {
        &self.tries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tries.is_empty()
    }

    /// Tries taken in the most recent win
    #[must_use]
    pub fn last(&self) -> Option<u32> {
        self.tries.last().copied()
    }

    /// Mean of the last ten entries (fewer if that is all there is), rounded to 2 decimals
    ///
    /// # Examples
    /// ```
    /// use numberdle::scores::ScoreRecord;
    ///
    /// let record = ScoreRecord::new(vec![3, 5, 2]);
    /// assert_eq!(record.last(), Some(2));
    /// assert_eq!(record.last_ten_average(), Some(3.33));
    /// ```
    #[must_use]
    pub fn last_ten_average(&self) -> Option<f64> {
        let start = self.tries.len().saturating_sub(RECENT_WINDOW);
        let recent = &self.tries[start..];
        if recent.is_empty() {
            return None;
        }
        let sum: u64 = recent.iter().map(|&t| u64::from(t)).sum();
        let mean = sum as f64 / recent.len() as f64;
        Some((mean * 100.0).round() / 100.0)
    }
}

impl From<Vec<u32>> for ScoreRecord {
    fn from(tries: Vec<u32>) -> Self {
        Self::new(tries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_record_has_no_stats() {
        let record = ScoreRecord::default();
        assert_eq!(record.last(), None);
        assert_eq!(record.last_ten_average(), None);
        assert!(record.is_empty());
    }

    #[test]
    fn last_and_average() {
        let record = ScoreRecord::new(vec![3, 5, 2]);
        assert_eq!(record.last(), Some(2));
        assert_eq!(record.last_ten_average(), Some(3.33));
    }

    #[test]
    fn average_uses_only_last_ten() {
        let mut tries = vec![6; 5];
        tries.extend([1, 2, 3, 4, 5, 6, 1, 2, 3, 4]);
        let record = ScoreRecord::new(tries);
        assert_eq!(record.len(), 15);
        assert_eq!(record.last_ten_average(), Some(3.1));
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let record = ScoreRecord::new(vec![1, 1, 2]);
        assert_eq!(record.last_ten_average(), Some(1.33));
        let record = ScoreRecord::new(vec![2, 3, 3]);
        assert_eq!(record.last_ten_average(), Some(2.67));
    }

    #[test]
    fn push_appends() {
        let mut record = ScoreRecord::default();
        record.push(4);
        record.push(1);
        assert_eq!(record.entries(), &[4, 1]);
        assert_eq!(record.last(), Some(1));
    }
}
