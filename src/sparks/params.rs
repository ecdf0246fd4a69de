/// Tuning for the spark cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct SparkParams {
    /// Sparks spawned per pointer move.
    pub per_move: usize,
    pub trail_len: usize,
    /// Life lost per tick. Life starts at 1.0.
    pub life_step: f64,
    /// Velocity per axis is drawn from `[-max_speed, max_speed)`.
    pub max_speed: f64,
    /// Position nudge per axis per tick, drawn from `[-jitter, jitter)`.
    pub jitter: f64,
    pub line_width: f64,
    pub glow_blur: f64,
    /// Below this viewport width the effect never activates.
    pub min_viewport_width: f64,
    /// Oldest sparks are dropped beyond this population.
    pub max_sparks: usize,
}

impl Default for SparkParams {
    fn default() -> Self {
        Self {
            per_move: 2,
            trail_len: 5,
            life_step: 0.05,
            max_speed: 2.0,
            jitter: 2.5,
            line_width: 2.0,
            glow_blur: 10.0,
            min_viewport_width: 768.0,
            max_sparks: 400,
        }
    }
}
