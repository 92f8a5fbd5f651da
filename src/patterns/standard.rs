//! Built-in connection database.

use crate::core::Result;

use super::database::PatternDatabase;

/// Source text of the built-in connection patterns.
pub const STANDARD_CONNECTIONS: &str = "
# Cutting points

Pattern CB1
# Diagonal stones with an opponent stone in one gap.
XO
O*
:8,B

Pattern CB2
# Wedge into a one-point jump; the eye space behind the gap is severed.
?X?
O*O
?,?
:8,B

Pattern CB3
# Cut behind a knight's move, the cutter's stones need no reading.
?OX
O*?
:8,Bs

# Connections

Pattern CC1
# Bamboo joint.
OO
..
OO
:8,C

Pattern CC2
# One-point jump with nothing around the gap.
?.?
O.O
?.?
:8,C

Pattern CC3
# Diagonal with both cutting points open.
O.
.O
:8,C
";

impl PatternDatabase {
    /// The built-in connection patterns.
    pub fn standard() -> Result<Self> {
        Self::parse(STANDARD_CONNECTIONS)
    }
}
