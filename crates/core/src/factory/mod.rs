use gstreamer as gst;

use crate::{NightcoreError, Result};

/// Creates a processing element of the given factory type with a stable
/// instance name, normalising any factory failure into
/// [`NightcoreError::ElementUnavailable`].
///
/// Factory failure here almost always means a missing plugin, which will not
/// appear mid-run, so callers treat the error as fatal and never retry.
pub fn make_element(kind: &str, name: &str) -> Result<gst::Element> {
    gst::ElementFactory::make(kind)
        .name(name)
        .build()
        .map_err(|_| NightcoreError::ElementUnavailable(kind.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gst::prelude::*;

    #[test]
    fn reports_the_missing_element_type() {
        if gst::init().is_err() {
            return;
        }

        let err = make_element("no-such-element-kind", "nope").unwrap_err();
        assert!(err.to_string().contains("no-such-element-kind"));
    }

    #[test]
    fn builds_a_named_element() {
        if gst::init().is_err() {
            return;
        }

        let element = make_element("identity", "passthrough").unwrap();
        assert_eq!(element.name(), "passthrough");
    }
}
