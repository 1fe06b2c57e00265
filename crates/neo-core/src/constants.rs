//! Simulation constants and tuning parameters.

// --- Scene scaling ---

/// Real distances below this (km) are clamped before log scaling.
pub const MIN_SCALED_DISTANCE_KM: f64 = 10_000.0;

/// Mean Earth radius (km).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Fraction of the log-scaled Earth radius used for the rendered globe.
pub const EARTH_VISUAL_SCALE: f64 = 0.4;

/// Rendered Earth radius in scene units: log10(max(6371, 10000)) * 0.4.
/// Also the physical radius used for the impact arrival check.
pub const EARTH_VISUAL_RADIUS: f64 = 4.0 * EARTH_VISUAL_SCALE;

/// Extra clearance added on top of the globe when placing periapsis.
pub const PERIAPSIS_CLEARANCE: f64 = 0.5;

/// Points farther than this from the origin are not drawn.
pub const VISIBILITY_BOUND: f64 = 100.0;

// --- Orbit model ---

/// Fraction of the asymptotic true anomaly that is sampled/traversed.
/// Keeps the arc short of the asymptote where r diverges.
pub const ASYMPTOTE_MARGIN: f64 = 0.85;

/// Default number of segments in a precomputed trajectory curve.
pub const TRAJECTORY_SAMPLES: usize = 120;

/// Eccentricity range for generated flybys (always > 1).
pub const ECCENTRICITY_MIN: f64 = 1.5;
pub const ECCENTRICITY_MAX: f64 = 2.5;

/// Inclination spread: (u - 0.5) * PI * this.
pub const INCLINATION_SPREAD: f64 = 0.6;

/// Base angular speed range (rad per simulated second).
pub const ANGULAR_SPEED_MIN: f64 = 0.01;
pub const ANGULAR_SPEED_MAX: f64 = 0.03;

/// Fraction of maxAngle over which initial phase angles are spread,
/// starting from the inbound end of the arc.
pub const INITIAL_PHASE_SPREAD: f64 = 0.5;

// --- Clock ---

/// Distance floor in the speed-factor term of the orbital clock.
pub const CLOCK_DISTANCE_FLOOR: f64 = 0.1;

/// Largest real-time delta accepted for one frame (seconds).
pub const MAX_FRAME_DELTA: f64 = 0.1;

// --- Impact ---

/// Number of segments in a generated descent path.
pub const IMPACT_PATH_POINTS: usize = 100;

/// Lateral curve strength as a fraction of the start distance.
pub const IMPACT_CURVE_STRENGTH: f64 = 0.3;

/// Interior path points are kept at least this far from the origin.
pub const MIN_SURFACE_DISTANCE: f64 = EARTH_VISUAL_RADIUS * 0.95;

/// Progress per second per km/s of impact velocity.
pub const IMPACT_SPEED_PER_KM_S: f64 = 0.002;

/// Distance floor in the descent speed multiplier.
pub const IMPACT_DISTANCE_FLOOR: f64 = 0.5;

/// Numerator of the descent speed multiplier: 1 + K / max(d, floor).
pub const IMPACT_ACCELERATION_GAIN: f64 = 2.0;

// --- Physics ---

/// Assumed bulk density of a stony asteroid (kg/m^3).
pub const ASTEROID_DENSITY_KG_M3: f64 = 3000.0;

/// Joules per megaton of TNT.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Joules per kiloton of TNT.
pub const JOULES_PER_KILOTON: f64 = 4.184e12;

/// Reference yield of the Hiroshima bomb (J).
pub const HIROSHIMA_JOULES: f64 = 6.3e13;

/// Fraction of impact energy coupled into seismic waves.
/// Empirical constant with no stated derivation; not a physical law.
pub const SEISMIC_EFFICIENCY: f64 = 0.01;

// --- Impact area ---

/// Energy normalisation for the damage-zone scale factor (J).
pub const AREA_ENERGY_REFERENCE_J: f64 = 1e15;

/// Exponent of the damage-zone scale factor.
pub const AREA_SCALE_EXPONENT: f64 = 0.33;

/// Zone radii per unit scale factor (km).
pub const THERMAL_RADIUS_PER_SCALE_KM: f64 = 0.5;
pub const PRESSURE_RADIUS_PER_SCALE_KM: f64 = 1.2;
pub const SHRAPNEL_RADIUS_PER_SCALE_KM: f64 = 2.0;

/// Infrastructure search radius bounds (m).
pub const SEARCH_RADIUS_MIN_M: f64 = 2_000.0;
pub const SEARCH_RADIUS_MAX_M: f64 = 15_000.0;

/// Site distance thresholds for zone classification (km).
pub const THERMAL_ZONE_KM: f64 = 5.0;
pub const PRESSURE_ZONE_KM: f64 = 12.0;

// --- Rendering hints ---

/// Visual radius of a body marker: clamp(diameter / divisor, min, max).
pub const VISUAL_RADIUS_DIVISOR: f64 = 600.0;
pub const VISUAL_RADIUS_MIN: f64 = 0.04;
pub const VISUAL_RADIUS_MAX: f64 = 0.15;

// --- Alerts ---

/// Maximum alerts retained between snapshots.
pub const MAX_PENDING_ALERTS: usize = 32;
