//! Historical impact events used to put an energy figure in context.

use neo_core::constants::{JOULES_PER_KILOTON, JOULES_PER_MEGATON};

/// A named historical event and its estimated energy release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Benchmark {
    pub name: &'static str,
    pub description: &'static str,
    pub energy_j: f64,
}

/// Fixed benchmark table. Order matters: ties resolve to the earlier entry.
pub const BENCHMARKS: [Benchmark; 4] = [
    Benchmark {
        name: "Chelyabinsk (2013)",
        description: "Shattered windows, 1,500 injured",
        energy_j: 500.0 * JOULES_PER_KILOTON,
    },
    Benchmark {
        name: "Tunguska (1908)",
        description: "Flattened 2,000 km2 of forest",
        energy_j: 15.0 * JOULES_PER_MEGATON,
    },
    Benchmark {
        name: "Meteor Crater (50,000 ya)",
        description: "1.2 km crater in Arizona",
        energy_j: 10.0 * JOULES_PER_MEGATON,
    },
    Benchmark {
        name: "Chicxulub (66 Ma)",
        description: "Mass extinction event",
        energy_j: 1e8 * JOULES_PER_MEGATON,
    },
];

/// The benchmark closest to `energy_j` on a log10 scale.
pub fn nearest_benchmark(energy_j: f64) -> &'static Benchmark {
    let log_energy = energy_j.log10();
    let mut closest = &BENCHMARKS[0];
    let mut closest_diff = (log_energy - closest.energy_j.log10()).abs();

    for benchmark in &BENCHMARKS[1..] {
        let diff = (log_energy - benchmark.energy_j.log10()).abs();
        if diff < closest_diff {
            closest = benchmark;
            closest_diff = diff;
        }
    }
    closest
}
