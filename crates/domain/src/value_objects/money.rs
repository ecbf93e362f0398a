//! Coinage carried by a character.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coins by denomination. All default to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub cp: i64,
    pub sp: i64,
    pub gp: i64,
    pub pp: i64,
}

impl Money {
    pub fn new(cp: i64, sp: i64, gp: i64, pp: i64) -> Self {
        Self { cp, sp, gp, pp }
    }

    pub fn is_empty(&self) -> bool {
        self.cp == 0 && self.sp == 0 && self.gp == 0 && self.pp == 0
    }

    /// Non-zero denominations, largest first: `"3 gp, 5 sp"`. `"0 gp"` when empty.
    pub fn display(&self) -> String {
        let parts: Vec<String> = [(self.pp, "pp"), (self.gp, "gp"), (self.sp, "sp"), (self.cp, "cp")]
            .iter()
            .filter(|(amount, _)| *amount != 0)
            .map(|(amount, unit)| format!("{} {}", amount, unit))
            .collect();

        if parts.is_empty() {
            "0 gp".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}
