/// Settings for a search.
///
/// ## Examples
/// ```
/// use wordboard_solver::SearchConfig;
/// let config = SearchConfig::default().with_bingo_bonus(40).with_validation(false);
/// assert_eq!(config.rack_capacity, 7);
/// assert_eq!(config.bingo_bonus, 40);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Number of tiles in a full rack. A turn placing this many tiles earns the bingo bonus.
    pub rack_capacity: usize,
    /// Points added for a turn that uses a full rack.
    pub bingo_bonus: i64,
    /// Check the whole board after each candidate turn before it is accepted.
    pub validate: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            rack_capacity: 7,
            bingo_bonus: 50,
            validate: true,
        }
    }
}

impl SearchConfig {
    pub fn with_rack_capacity(mut self, rack_capacity: usize) -> SearchConfig {
        self.rack_capacity = rack_capacity;
        self
    }

    pub fn with_bingo_bonus(mut self, bingo_bonus: i64) -> SearchConfig {
        self.bingo_bonus = bingo_bonus;
        self
    }

    /// Switch the board check off. Candidate turns are then only checked along the
    /// lines they were grown on.
    pub fn with_validation(mut self, validate: bool) -> SearchConfig {
        self.validate = validate;
        self
    }
}
