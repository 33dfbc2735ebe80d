//! EAGLE layer id lookup
//!
//! EAGLE numbers its layers globally; symbol layers (91 and up) only exist in
//! schematics and the copper/board layers (1 to 52) only exist on boards. An
//! id without a counterpart in the requested domain has no mapping, which is
//! not an error: callers skip the primitive.

use eagleport_core::Layer;

/// Highest EAGLE id of an inner copper layer (ids 2..=15 are inner 1..=14)
const LAST_INNER_COPPER_ID: i32 = 15;

const SCHEMATIC_LAYERS: &[(i32, Layer)] = &[
    (94, Layer::SymbolOutlines),
    (95, Layer::SymbolNames),
    (96, Layer::SymbolValues),
    (97, Layer::SchematicDocumentation),
    (98, Layer::SchematicGuide),
];

const BOARD_LAYERS: &[(i32, Layer)] = &[
    (1, Layer::TopCopper),
    (16, Layer::BottomCopper),
    (20, Layer::BoardOutlines),
    (21, Layer::TopLegend),
    (22, Layer::BottomLegend),
    (25, Layer::TopNames),
    (26, Layer::BottomNames),
    (27, Layer::TopValues),
    (28, Layer::BottomValues),
    (29, Layer::TopStopMask),
    (30, Layer::BottomStopMask),
    (31, Layer::TopSolderPaste),
    (32, Layer::BottomSolderPaste),
    (35, Layer::TopGlue),
    (36, Layer::BottomGlue),
    (39, Layer::TopCourtyard),
    (40, Layer::BottomCourtyard),
    (46, Layer::BoardCutouts),
    (47, Layer::BoardMeasures),
    (48, Layer::BoardDocumentation),
    (51, Layer::TopDocumentation),
    (52, Layer::BottomDocumentation),
];

fn lookup(table: &[(i32, Layer)], id: i32) -> Option<Layer> {
    table
        .iter()
        .find(|(eagle_id, _)| *eagle_id == id)
        .map(|(_, layer)| *layer)
}

pub fn try_convert_schematic_layer(id: i32) -> Option<Layer> {
    lookup(SCHEMATIC_LAYERS, id)
}

pub fn try_convert_board_layer(id: i32) -> Option<Layer> {
    if (2..=LAST_INNER_COPPER_ID).contains(&id) {
        // In range, so the cast is lossless.
        return Some(Layer::InnerCopper((id - 1) as u8));
    }
    lookup(BOARD_LAYERS, id)
}
