//! Elevation shadows.

/// Number of elevation levels, including the flat level 0.
pub const SHADOW_COUNT: usize = 25;

const UMBRA_OPACITY: f64 = 0.2;
const PENUMBRA_OPACITY: f64 = 0.14;
const AMBIENT_OPACITY: f64 = 0.12;

/// Offsets for levels 1 to 24: umbra, penumbra and ambient layers, each as
/// x, y, blur and spread in pixels.
const LAYERS: [[i8; 12]; SHADOW_COUNT - 1] = [
    [0, 2, 1, -1, 0, 1, 1, 0, 0, 1, 3, 0],
    [0, 3, 1, -2, 0, 2, 2, 0, 0, 1, 5, 0],
    [0, 3, 3, -2, 0, 3, 4, 0, 0, 1, 8, 0],
    [0, 2, 4, -1, 0, 4, 5, 0, 0, 1, 10, 0],
    [0, 3, 5, -1, 0, 5, 8, 0, 0, 1, 14, 0],
    [0, 3, 5, -1, 0, 6, 10, 0, 0, 1, 18, 0],
    [0, 4, 5, -2, 0, 7, 10, 1, 0, 2, 16, 1],
    [0, 5, 5, -3, 0, 8, 10, 1, 0, 3, 14, 2],
    [0, 5, 6, -3, 0, 9, 12, 1, 0, 3, 16, 2],
    [0, 6, 6, -3, 0, 10, 14, 1, 0, 4, 18, 3],
    [0, 6, 7, -4, 0, 11, 15, 1, 0, 4, 20, 3],
    [0, 7, 8, -4, 0, 12, 17, 2, 0, 5, 22, 4],
    [0, 7, 8, -4, 0, 13, 19, 2, 0, 5, 24, 4],
    [0, 7, 9, -4, 0, 14, 21, 2, 0, 5, 26, 4],
    [0, 8, 9, -5, 0, 15, 22, 2, 0, 6, 28, 5],
    [0, 8, 10, -5, 0, 16, 24, 2, 0, 6, 30, 5],
    [0, 8, 11, -5, 0, 17, 26, 2, 0, 6, 32, 5],
    [0, 9, 11, -5, 0, 18, 28, 2, 0, 7, 34, 6],
    [0, 9, 12, -6, 0, 19, 29, 2, 0, 7, 36, 6],
    [0, 10, 13, -6, 0, 20, 31, 3, 0, 8, 38, 7],
    [0, 10, 13, -6, 0, 21, 33, 3, 0, 8, 40, 7],
    [0, 10, 14, -6, 0, 22, 35, 3, 0, 8, 42, 7],
    [0, 11, 14, -7, 0, 23, 36, 3, 0, 9, 44, 8],
    [0, 11, 15, -7, 0, 24, 38, 3, 0, 9, 46, 8],
];

fn layer(px: &[i8], opacity: f64) -> String {
    format!(
        "{}px {}px {}px {}px rgba(0,0,0,{})",
        px[0], px[1], px[2], px[3], opacity
    )
}

/// The default elevation list: `"none"` followed by 24 layered shadows.
pub fn default_shadows() -> Vec<String> {
    let mut shadows = Vec::with_capacity(SHADOW_COUNT);
    shadows.push("none".to_string());
    for px in &LAYERS {
        shadows.push(
            [
                layer(&px[0..4], UMBRA_OPACITY),
                layer(&px[4..8], PENUMBRA_OPACITY),
                layer(&px[8..12], AMBIENT_OPACITY),
            ]
            .join(","),
        );
    }
    shadows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_and_flat_level() {
        let shadows = default_shadows();
        assert_eq!(shadows.len(), SHADOW_COUNT);
        assert_eq!(shadows[0], "none");
    }

    #[test]
    fn test_first_elevation() {
        assert_eq!(
            default_shadows()[1],
            "0px 2px 1px -1px rgba(0,0,0,0.2),0px 1px 1px 0px rgba(0,0,0,0.14),0px 1px 3px 0px rgba(0,0,0,0.12)"
        );
    }
}
