use gstreamer as gst;
use gstreamer::prelude::*;

use crate::config::BAND_COUNT;

/// Applies the given gains to the ten named bands of an `equalizer-10bands`
/// element, `band0` (lowest frequency) first.
pub fn apply_band_gains(equalizer: &gst::Element, gains: &[f64; BAND_COUNT]) {
    for (index, gain) in gains.iter().enumerate() {
        equalizer.set_property(&format!("band{index}"), *gain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BAND_GAINS;

    #[test]
    fn sets_every_band_in_order() {
        if gst::init().is_err() {
            return;
        }
        let Ok(equalizer) = gst::ElementFactory::make("equalizer-10bands").build() else {
            // The good plugins are not installed on this host.
            return;
        };

        apply_band_gains(&equalizer, &DEFAULT_BAND_GAINS);

        for (index, expected) in DEFAULT_BAND_GAINS.iter().enumerate() {
            let actual = equalizer.property::<f64>(&format!("band{index}"));
            assert_eq!(actual, *expected, "band{index} gain mismatch");
        }
    }
}
