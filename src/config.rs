//! User configuration, read from an optional JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::domain::PieceKind;

/// Piece a pawn becomes when it reaches the last rank
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PromotionPiece {
    #[default]
    Queen,
    Rook,
    Bishop,
    Knight,
}

impl PromotionPiece {
    pub fn kind(self) -> PieceKind {
        match self {
            PromotionPiece::Queen => PieceKind::Queen,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Knight => PieceKind::Knight,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Automatic promotion choice
    pub promotion: PromotionPiece,
    /// Mark the legal destinations of the selected piece
    pub show_legal_destinations: bool,
    /// Tint the origin and destination of the last move shown
    pub highlight_last_move: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            promotion: PromotionPiece::Queen,
            show_legal_destinations: true,
            highlight_last_move: true,
            window_width: 900.0,
            window_height: 600.0,
        }
    }
}

impl BoardConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid board config")
    }

    /// Load the config at `path`, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// JSON schema of the config file, pretty-printed
    pub fn schema_json() -> Result<String> {
        let schema = schemars::schema_for!(BoardConfig);
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}
