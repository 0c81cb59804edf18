//! Axis tick selection.

/// Aim for about this many value-axis lines when no spacing is given.
const TARGET_LINES: f64 = 8.0;

/// Picks a round step (1, 2, 5, 10, 20, 50, ...) for a value range.
pub fn nice_step(range: f64) -> f64 {
    let raw_step = range / TARGET_LINES;
    let magnitude = 10f64.powf(raw_step.log10().floor());
    let normalized = raw_step / magnitude;
    if normalized < 1.5 {
        magnitude
    } else if normalized < 3.5 {
        2.0 * magnitude
    } else if normalized < 7.5 {
        5.0 * magnitude
    } else {
        10.0 * magnitude
    }
}

/// Tick values covering `min..=max` at a fixed step, starting at the first
/// multiple of `step` at or above `min`.
pub fn ticks(min: f64, max: f64, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 || min > max {
        return Vec::new();
    }

    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut value = first;
    // Tolerate accumulated float error at the top of the range.
    while value <= max + step * 1e-9 {
        out.push(value);
        value += step;
    }
    out
}

/// Ticks for a value axis: the fixed `spacing` when given, a nice step
/// derived from the range otherwise.
pub fn value_ticks(min: f64, max: f64, spacing: Option<f64>) -> Vec<f64> {
    let range = max - min;
    if !range.is_finite() || range <= 0.0 {
        return Vec::new();
    }
    let step = spacing.unwrap_or_else(|| nice_step(range));
    ticks(min, max, step)
}

/// Picks up to `count` slot indices spread evenly across `0..slots`,
/// always including the first and last slot. Used for date labels.
pub fn label_slots(slots: usize, count: usize) -> Vec<usize> {
    if slots == 0 || count == 0 {
        return Vec::new();
    }
    if slots <= count {
        return (0..slots).collect();
    }

    let mut out = Vec::with_capacity(count);
    let last = (slots - 1) as f64;
    for i in 0..count {
        let slot = (last * i as f64 / (count - 1) as f64).round() as usize;
        if out.last() != Some(&slot) {
            out.push(slot);
        }
    }
    out
}
