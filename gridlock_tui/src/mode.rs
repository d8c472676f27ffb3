//! Game mode selection.

use serde::{Deserialize, Serialize};

/// Game mode: who plays O?
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Two humans share the keyboard.
    #[default]
    TwoPlayer,
    /// O's moves are chosen by the CPU.
    Cpu,
}

impl Mode {
    /// Returns display name.
    pub fn label(self) -> &'static str {
        match self {
            Mode::TwoPlayer => "2 Player",
            Mode::Cpu => "vs CPU",
        }
    }
}
