//! Shared chart colors, as linear RGB triples.

/// Up-day candle fill.
pub const UP_COLOR: [f32; 3] = [0.0, 0.78, 0.33]; // Green
/// Down-day candle fill.
pub const DOWN_COLOR: [f32; 3] = [0.88, 0.22, 0.21]; // Red
/// Gridlines and axis text.
pub const GRID_COLOR: [f32; 3] = [0.3, 0.3, 0.35]; // Gray

/// Colors cycled by series index on the comparison chart.
pub const LINE_COLORS: [[f32; 3]; 6] = [
    [0.12, 0.47, 0.71], // Blue
    [1.00, 0.50, 0.05], // Orange
    [0.17, 0.63, 0.17], // Green
    [0.84, 0.15, 0.16], // Red
    [0.58, 0.40, 0.74], // Purple
    [0.55, 0.34, 0.29], // Brown
];

/// Colors cycled by slice index on the donut chart.
pub const DONUT_COLORS: [[f32; 3]; 10] = [
    [0.12, 0.47, 0.71],
    [1.00, 0.50, 0.05],
    [0.17, 0.63, 0.17],
    [0.84, 0.15, 0.16],
    [0.58, 0.40, 0.74],
    [0.55, 0.34, 0.29],
    [0.89, 0.47, 0.76],
    [0.50, 0.50, 0.50],
    [0.74, 0.74, 0.13],
    [0.09, 0.75, 0.81],
];

pub fn line_color(index: usize) -> [f32; 3] {
    LINE_COLORS[index % LINE_COLORS.len()]
}

pub fn donut_color(index: usize) -> [f32; 3] {
    DONUT_COLORS[index % DONUT_COLORS.len()]
}
