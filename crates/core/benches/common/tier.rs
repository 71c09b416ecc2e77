use std::env;
use std::time::Duration;

use criterion::BenchmarkGroup;
use criterion::measurement::Measurement;

/// Bench depth, chosen with `CATASTO_BENCH_TIER=full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BenchTier {
    Quick,
    Full,
}

impl BenchTier {
    /// Number of registry sections in the synthetic history.
    pub fn history_sizes(self) -> &'static [usize] {
        match self {
            BenchTier::Quick => &[4, 16],
            BenchTier::Full => &[4, 16, 64],
        }
    }
}

pub fn bench_tier() -> BenchTier {
    match env::var("CATASTO_BENCH_TIER").as_deref() {
        Ok("full") => BenchTier::Full,
        _ => BenchTier::Quick,
    }
}

pub fn configure_group<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, tier: BenchTier) {
    let (sample_size, measurement) = match tier {
        BenchTier::Quick => (20, Duration::from_secs(3)),
        BenchTier::Full => (50, Duration::from_secs(8)),
    };
    group.sample_size(sample_size);
    group.measurement_time(measurement);
}
