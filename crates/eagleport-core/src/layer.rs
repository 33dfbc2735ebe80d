//! Schematic and board layers
//!
//! Layers are identified by a stable string id (for example `top_cu` or
//! `in2_cu`). Inner copper layers are parametrized by their 1-based index.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    // Schematic
    SymbolOutlines,
    SymbolNames,
    SymbolValues,
    SchematicDocumentation,
    SchematicGuide,

    // Board
    BoardOutlines,
    BoardCutouts,
    BoardMeasures,
    BoardDocumentation,
    TopCopper,
    /// Inner copper layer, numbered from 1
    InnerCopper(u8),
    BottomCopper,
    TopLegend,
    BottomLegend,
    TopDocumentation,
    BottomDocumentation,
    TopNames,
    BottomNames,
    TopValues,
    BottomValues,
    TopStopMask,
    BottomStopMask,
    TopSolderPaste,
    BottomSolderPaste,
    TopGlue,
    BottomGlue,
    TopCourtyard,
    BottomCourtyard,
}

impl Layer {
    /// Stable identifier of the layer.
    pub fn id(&self) -> String {
        let id = match self {
            Self::SymbolOutlines => "sym_outlines",
            Self::SymbolNames => "sym_names",
            Self::SymbolValues => "sym_values",
            Self::SchematicDocumentation => "sch_documentation",
            Self::SchematicGuide => "sch_guide",
            Self::BoardOutlines => "brd_outlines",
            Self::BoardCutouts => "brd_cutouts",
            Self::BoardMeasures => "brd_measures",
            Self::BoardDocumentation => "brd_documentation",
            Self::TopCopper => "top_cu",
            Self::InnerCopper(n) => return format!("in{}_cu", n),
            Self::BottomCopper => "bot_cu",
            Self::TopLegend => "top_legend",
            Self::BottomLegend => "bot_legend",
            Self::TopDocumentation => "top_documentation",
            Self::BottomDocumentation => "bot_documentation",
            Self::TopNames => "top_names",
            Self::BottomNames => "bot_names",
            Self::TopValues => "top_values",
            Self::BottomValues => "bot_values",
            Self::TopStopMask => "top_stop_mask",
            Self::BottomStopMask => "bot_stop_mask",
            Self::TopSolderPaste => "top_solder_paste",
            Self::BottomSolderPaste => "bot_solder_paste",
            Self::TopGlue => "top_glue",
            Self::BottomGlue => "bot_glue",
            Self::TopCourtyard => "top_courtyard",
            Self::BottomCourtyard => "bot_courtyard",
        };
        id.to_string()
    }

    pub fn is_copper(&self) -> bool {
        matches!(
            self,
            Self::TopCopper | Self::InnerCopper(_) | Self::BottomCopper
        )
    }

    pub fn is_schematic(&self) -> bool {
        matches!(
            self,
            Self::SymbolOutlines
                | Self::SymbolNames
                | Self::SymbolValues
                | Self::SchematicDocumentation
                | Self::SchematicGuide
        )
    }

    pub fn is_board(&self) -> bool {
        !self.is_schematic()
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
