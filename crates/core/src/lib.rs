//! Core library for the nightcore audio converter.
//!
//! The crate orchestrates a GStreamer pipeline that speeds up and repitches
//! an input audio file, then either encodes the result to MP3 or plays it
//! through the default audio output. All signal processing is delegated to
//! GStreamer's prebuilt elements; each module here owns one slice of the
//! orchestration (configuration, element creation, graph assembly,
//! lifecycle).

pub mod config;
pub mod equalizer;
pub mod error;
pub mod factory;
pub mod lifecycle;
pub mod pipeline;

pub use config::{RunConfig, BAND_COUNT, DEFAULT_BAND_GAINS};
pub use error::{NightcoreError, Result};
pub use factory::make_element;
pub use lifecycle::{PipelineController, RunState, StatusEvent};
pub use pipeline::{NightcorePipeline, OutputMode};

use gstreamer as gst;

/// Initialises the underlying media framework. Must be called once before
/// any pipeline is built.
pub fn init() -> Result<()> {
    gst::init()?;
    Ok(())
}
