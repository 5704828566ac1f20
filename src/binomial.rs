const SEED_ROWS: usize = 10;

/// Highest row whose entries all fit into `u128`.
pub const MAX_EXACT_ROW: usize = 131;

/// Rows of Pascal's triangle, grown on demand and never shrunk.
#[derive(Debug, Clone)]
pub struct BinomialTable {
    rows: Vec<Vec<u128>>,
}

impl BinomialTable {

    /// Table holding rows 0 through 10.
    pub fn new() -> Self {
        let mut table = BinomialTable { rows: vec![vec![1]] };
        table.grow_to(SEED_ROWS);
        table
    }

    /// Table pre-grown to at least row `n`.
    pub fn with_rows(n: usize) -> Self {
        let mut table = BinomialTable::new();
        table.grow_to(n);
        table
    }

    /// Binomial coefficient `C(n, k)`. Requires `k <= n`.
    ///
    /// Entries of rows above [MAX_EXACT_ROW] saturate at `u128::MAX`.
    /// # Example
    /// ```
    /// use curve_fit::BinomialTable;
    ///
    /// let mut table = BinomialTable::new();
    /// assert_eq!(table.binomial(5, 2), 10);
    /// assert_eq!(table.binomial(20, 10), 184756);
    /// ```
    pub fn binomial(&mut self, n: usize, k: usize) -> u128 {
        self.grow_to(n);
        self.rows[n][k]
    }

    /// Highest row currently held.
    pub fn max_row(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn grow_to(&mut self, n: usize) {
        while self.max_row() < n {
            let previous = &self.rows[self.rows.len() - 1];
            let mut row = Vec::with_capacity(previous.len() + 1);
            row.push(1);
            for i in 1..previous.len() {
                row.push(previous[i - 1].saturating_add(previous[i]));
            }
            row.push(1);
            self.rows.push(row);
        }
    }
}

impl Default for BinomialTable {
    fn default() -> Self {
        BinomialTable::new()
    }
}
