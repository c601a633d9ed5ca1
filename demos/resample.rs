//! Walks the graph of a sampled function at uniform arc-length steps.
//!
//! Run with `RUST_LOG=arcmap=trace` to see hint misses.

use arcmap::{ArcLengthMapper, Hint};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLES: u32 = 64;
const STEPS: u32 = 16;

fn main() -> arcmap::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut mapper = ArcLengthMapper::new();
    for i in 0..SAMPLES {
        let x = f64::from(i) / f64::from(SAMPLES - 1) * std::f64::consts::TAU;
        mapper.try_add_sample(x, x.sin())?;
    }
    info!(
        samples = mapper.len(),
        total = mapper.total_arc_length(),
        "sampled sin(x) over one period"
    );

    mapper.try_normalize_range(1.0)?;

    let mut hint = Hint::new();
    for step in 0..=STEPS {
        let arc_len = f64::from(step) / f64::from(STEPS);
        let x = mapper.arc_len_to_x(arc_len, &mut hint);
        println!("{arc_len:>6.3} -> x = {x:>8.5}, f(x) = {:>8.5}", x.sin());
    }
    Ok(())
}
