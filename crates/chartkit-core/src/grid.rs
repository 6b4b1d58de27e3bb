// File: crates/chartkit-core/src/grid.rs
// Summary: Tick/grid spacing helpers.

/// `steps` evenly spaced values from `start` to `end` inclusive.
/// One step yields just `start`; zero steps yields nothing.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}
