//! Control points for the built-in continuous palettes.
//!
//! Each table is sampled at evenly spaced positions unless noted; colors in
//! between are linearly interpolated.

/// Evenly spaced 0xRRGGBB stops.
pub(crate) const VIRIDIS: &[u32] = &[
    0x440154, 0x482878, 0x3E4989, 0x31688E, 0x26828E, 0x1F9E89, 0x35B779, 0x6DCD59, 0xFDE725,
];

pub(crate) const MAGMA: &[u32] = &[
    0x000004, 0x1C1044, 0x4F127B, 0x812581, 0xB5367A, 0xE55064, 0xFB8761, 0xFEC287, 0xFCFDBF,
];

pub(crate) const INFERNO: &[u32] = &[
    0x000004, 0x1F0C48, 0x550F6D, 0x88226A, 0xBA3655, 0xE35933, 0xF98C0A, 0xF9C932, 0xFCFFA4,
];

pub(crate) const PLASMA: &[u32] = &[
    0x0D0887, 0x4C02A1, 0x7E03A8, 0xA92395, 0xCC4778, 0xE56B5D, 0xF89441, 0xFDC328, 0xF0F921,
];

pub(crate) const CIVIDIS: &[u32] = &[
    0x00224E, 0x123570, 0x3B496C, 0x575D6D, 0x707173, 0x8A8779, 0xA69D75, 0xC4B56C, 0xFDEA45,
];

pub(crate) const GRAY: &[u32] = &[0x000000, 0xFFFFFF];

pub(crate) const GREYS: &[u32] = &[0xFFFFFF, 0x000000];

pub(crate) const COOLWARM: &[u32] = &[0x3B4CC0, 0xDDDCDC, 0xB40426];

/// Unevenly spaced: black, red, yellow, white.
pub(crate) const HOT: &[(f64, u32)] = &[
    (0.0, 0x0A0000),
    (0.365, 0xFF0000),
    (0.746, 0xFFFF00),
    (1.0, 0xFFFFFF),
];

/// Name used when a color render does not ask for a palette.
pub const DEFAULT_PALETTE: &str = "viridis";

/// Every name accepted by [`super::Palette::named`], without the `_r`
/// reversed variants.
pub const PALETTE_NAMES: &[&str] = &[
    "viridis", "magma", "inferno", "plasma", "cividis", "gray", "greys", "hot", "coolwarm",
];

/// Looks up a table by name and returns `(position, 0xRRGGBB)` stops.
pub(crate) fn stops(name: &str) -> Option<Vec<(f64, u32)>> {
    let even = |table: &[u32]| {
        let last = (table.len() - 1) as f64;
        table
            .iter()
            .enumerate()
            .map(|(i, &c)| (i as f64 / last, c))
            .collect::<Vec<_>>()
    };
    let stops = match name {
        "viridis" => even(VIRIDIS),
        "magma" => even(MAGMA),
        "inferno" => even(INFERNO),
        "plasma" => even(PLASMA),
        "cividis" => even(CIVIDIS),
        "gray" | "grey" => even(GRAY),
        "greys" | "Greys" => even(GREYS),
        "coolwarm" => even(COOLWARM),
        "hot" => HOT.to_vec(),
        _ => return None,
    };
    Some(stops)
}
