/// Options for an online training run.
///
/// # Fields
/// - `tolerance` — absolute distance from the target within which an
///   example's output counts as correct in the report
/// - `log_every` — emit one report line every `log_every` examples; `1`
///   reports every example, `0` disables reporting entirely
#[derive(Debug, Clone)]
pub struct TrainConfig {
    pub tolerance: f64,
    pub log_every: usize,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            tolerance: 0.1,
            log_every: 1,
        }
    }
}
