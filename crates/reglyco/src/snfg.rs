//! The 3D-SNFG colour and shape convention for rendering monosaccharides,
//! keyed by the residue codes found in deposited structures

/// sRGB colour with 0–255 channels
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const SNFG_WHITE: Rgb = Rgb(255, 255, 255);
pub const SNFG_BLUE: Rgb = Rgb(0, 144, 188);
pub const SNFG_GREEN: Rgb = Rgb(0, 166, 81);
pub const SNFG_YELLOW: Rgb = Rgb(255, 212, 0);
pub const SNFG_LIGHT_BLUE: Rgb = Rgb(143, 204, 233);
pub const SNFG_PINK: Rgb = Rgb(246, 158, 161);
pub const SNFG_PURPLE: Rgb = Rgb(165, 67, 153);
pub const SNFG_BROWN: Rgb = Rgb(161, 122, 77);
pub const SNFG_ORANGE: Rgb = Rgb(244, 121, 32);
pub const SNFG_RED: Rgb = Rgb(237, 28, 36);

/// The solid drawn at a residue's ring centre. `HalfDiamond` is
/// white-over-colour; `HalfDiamondReverse` colour-over-white.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SnfgShape {
    Sphere,
    Cube,
    Cone,
    Star,
    Diamond,
    HalfDiamond,
    HalfDiamondReverse,
}

/// Looks up the SNFG colour and shape for a residue code (including the
/// common alias codes), or `None` for residues outside the convention
#[must_use]
pub fn snfg_scheme(residue_code: &str) -> Option<(Rgb, SnfgShape)> {
    use SnfgShape::*;

    let scheme = match residue_code.to_ascii_uppercase().as_str() {
        // Hexoses
        "GLC" | "MAL" | "BGC" => (SNFG_BLUE, Sphere),
        "MAN" | "BMA" => (SNFG_GREEN, Sphere),
        "GAL" | "GLA" => (SNFG_YELLOW, Sphere),
        // Deoxyhexoses
        "FUC" | "FUL" => (SNFG_RED, Cone),
        // Pentoses
        "XYL" | "XYP" | "XYS" => (SNFG_ORANGE, Star),
        "ARA" | "AHR" => (SNFG_GREEN, Star),
        "RIB" => (SNFG_PINK, Star),
        // N-acetyl hexosamines
        "NAG" | "GLCNAC" | "4YS" | "SGN" | "BGLN" | "NDG" => (SNFG_BLUE, Cube),
        "NGA" | "GALNAC" | "A2G" => (SNFG_YELLOW, Cube),
        "MANNA" => (SNFG_GREEN, Cube),
        // Sialic acids and KDN
        "NEU5AC" | "SIA" => (SNFG_PURPLE, Diamond),
        "NEU5GC" | "NGC" => (SNFG_LIGHT_BLUE, Diamond),
        "KDN" => (SNFG_GREEN, Diamond),
        // Uronic acids
        "ADA" => (SNFG_YELLOW, HalfDiamond),
        "GLCA" | "GCU" | "BDP" => (SNFG_BLUE, HalfDiamond),
        "IDOA" | "IDS" | "IDR" => (SNFG_BROWN, HalfDiamondReverse),
        "API" => (SNFG_PINK, Diamond),
        _ => return None,
    };
    Some(scheme)
}
