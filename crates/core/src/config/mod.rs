use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Number of gain bands on the ten-band equalizer element.
pub const BAND_COUNT: usize = 10;

/// Pitch-shift factor applied by the pitch element.
pub const DEFAULT_PITCH_FACTOR: f64 = 1.0;

/// Playback-rate factor applied by the pitch element. This is where the
/// nightcore speed-up comes from.
pub const DEFAULT_RATE_FACTOR: f64 = 1.3;

/// Equalizer gains in dB, lowest band first.
pub const DEFAULT_BAND_GAINS: [f64; BAND_COUNT] =
    [1.0, 3.0, 3.0, 1.0, 0.0, 0.0, -1.0, -2.0, -2.0, -2.0];

/// Immutable run configuration, constructed once at startup from the process
/// arguments and the compiled-in tunables above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Audio file to read and decode.
    pub input_path: PathBuf,
    /// Where to write the encoded result. `None` selects live playback
    /// through the default audio output instead.
    pub output_path: Option<PathBuf>,
    /// Multiplicative pitch shift applied after resampling.
    pub pitch_factor: f64,
    /// Multiplicative playback-rate change.
    pub rate_factor: f64,
    /// Per-band equalizer gains in dB, applied to `band0`..`band9` in order.
    pub band_gains: [f64; BAND_COUNT],
}

impl RunConfig {
    /// Creates a configuration for the given paths with the compiled-in
    /// effect tunables.
    pub fn new(input_path: PathBuf, output_path: Option<PathBuf>) -> Self {
        Self {
            input_path,
            output_path,
            pitch_factor: DEFAULT_PITCH_FACTOR,
            rate_factor: DEFAULT_RATE_FACTOR,
            band_gains: DEFAULT_BAND_GAINS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_the_compiled_in_tunables() {
        let config = RunConfig::new(PathBuf::from("song.flac"), None);

        assert_eq!(config.pitch_factor, 1.0);
        assert_eq!(config.rate_factor, 1.3);
        assert_eq!(config.band_gains.len(), BAND_COUNT);
        assert_eq!(config.band_gains[0], 1.0);
        assert_eq!(config.band_gains[9], -2.0);
    }

    #[test]
    fn keeps_the_requested_paths() {
        let config = RunConfig::new(
            PathBuf::from("in.mp3"),
            Some(PathBuf::from("out.mp3")),
        );

        assert_eq!(config.input_path, PathBuf::from("in.mp3"));
        assert_eq!(config.output_path.as_deref(), Some("out.mp3".as_ref()));
    }
}
