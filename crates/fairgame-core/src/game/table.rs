//! Help table showing the full payoff matrix for a move set.

use super::{resolve, MoveSet, Outcome};
use std::fmt;

/// (n+1) x (n+1) display grid of pairwise outcomes.
///
/// The header row lists every move; each body row starts with a move name and
/// labels the outcome against each column move, read as "row move versus
/// column move" with the row move played by you. Cells come straight from
/// [`resolve`], so the table always matches what a real round would report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PayoffTable {
    rows: Vec<Vec<String>>,
}

impl PayoffTable {
    /// Derive the full payoff grid for a move set.
    pub fn build(moves: &MoveSet) -> Self {
        let n = moves.len();
        let mut rows = Vec::with_capacity(n + 1);

        let mut header = Vec::with_capacity(n + 1);
        header.push("Moves".to_string());
        header.extend(moves.names().iter().cloned());
        rows.push(header);

        for player in 0..n {
            let mut row = Vec::with_capacity(n + 1);
            row.push(moves.name(player).to_string());
            for computer in 0..n {
                let label = match resolve(moves, player, computer) {
                    Outcome::Draw => "Draw",
                    Outcome::PlayerWins => "Win",
                    Outcome::ComputerWins => "Lose",
                };
                row.push(label.to_string());
            }
            rows.push(row);
        }

        Self { rows }
    }

    /// The grid rows, header first
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

impl fmt::Display for PayoffTable {
    /// Tab-separated rows, one line per row
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for row in &self.rows {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{}", row.join("\t"))?;
        }
        Ok(())
    }
}
