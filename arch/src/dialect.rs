use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which comp/jump tables the encoder uses.
///
/// `Standard` follows the Hack instruction set. `Legacy` reproduces the tables
/// of the older assembler bit for bit: `JMP` shares `JLE`'s code `110`,
/// `A+1`/`M+1` encode as `011111`, and the `1` and `D&M` mnemonics are rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Dialect {
    #[default]
    Standard,
    Legacy,
}
