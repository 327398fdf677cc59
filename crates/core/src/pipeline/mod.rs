use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gstreamer as gst;
use gstreamer::prelude::*;
use tracing::{debug, info, warn};

use crate::equalizer::apply_band_gains;
use crate::factory::make_element;
use crate::{NightcoreError, Result, RunConfig};

/// How the tail of the pipeline disposes of the processed audio. Decided
/// once at construction time and fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    /// Play through an automatically selected audio output.
    Playback,
    /// Encode to MP3 and write to the given file.
    Encode(PathBuf),
}

impl OutputMode {
    pub fn from_output_path(output_path: Option<&Path>) -> Self {
        match output_path {
            Some(path) => Self::Encode(path.to_path_buf()),
            None => Self::Playback,
        }
    }
}

/// The assembled processing graph.
///
/// The fixed chain is `filesrc → decodebin → audioconvert → audioresample →
/// pitch → equalizer-10bands → audioconvert → audioresample`, followed by a
/// mode-dependent tail. Every edge except decodebin's output is linked
/// statically; the decoder exposes no source pads until the container has
/// been parsed, so that one edge is linked from the pad-added callback while
/// the pipeline is already running.
#[derive(Debug)]
pub struct NightcorePipeline {
    pipeline: gst::Pipeline,
}

impl NightcorePipeline {
    /// Builds the full graph for the given configuration. Any failure here
    /// is fatal; no partially constructed graph is ever started.
    pub fn build(config: &RunConfig) -> Result<Self> {
        let pipeline = gst::Pipeline::with_name("nightcore");

        let source = make_element("filesrc", "source")?;
        let decode = make_element("decodebin", "decode")?;
        let convert_in = make_element("audioconvert", "convert-in")?;
        let resample_in = make_element("audioresample", "resample-in")?;
        let pitch = make_element("pitch", "pitch")?;
        let equalizer = make_element("equalizer-10bands", "equalizer")?;
        let convert_out = make_element("audioconvert", "convert-out")?;
        let resample_out = make_element("audioresample", "resample-out")?;

        source.set_property("location", config.input_path.to_string_lossy().as_ref());
        // The pitch element exposes its factors as 32-bit floats.
        pitch.set_property("rate", config.rate_factor as f32);
        pitch.set_property("pitch", config.pitch_factor as f32);
        apply_band_gains(&equalizer, &config.band_gains);

        pipeline.add_many([
            &source,
            &decode,
            &convert_in,
            &resample_in,
            &pitch,
            &equalizer,
            &convert_out,
            &resample_out,
        ])?;

        source.link(&decode)?;
        gst::Element::link_many([
            &convert_in,
            &resample_in,
            &pitch,
            &equalizer,
            &convert_out,
            &resample_out,
        ])?;

        let mode = OutputMode::from_output_path(config.output_path.as_deref());
        build_tail(&pipeline, &resample_out, mode)?;

        register_pad_linker(&decode, &convert_in)?;

        Ok(Self { pipeline })
    }

    /// Borrows the underlying GStreamer pipeline.
    pub fn pipeline(&self) -> &gst::Pipeline {
        &self.pipeline
    }

    /// Hands the underlying pipeline to the lifecycle controller.
    pub fn into_pipeline(self) -> gst::Pipeline {
        self.pipeline
    }
}

/// Builds and links the mode-dependent sink subgraph onto `upstream`.
fn build_tail(pipeline: &gst::Pipeline, upstream: &gst::Element, mode: OutputMode) -> Result<()> {
    match mode {
        OutputMode::Encode(path) => {
            let encoder = make_element("lamemp3enc", "encoder")?;
            let sink = make_element("filesink", "file-sink")?;
            sink.set_property("location", path.to_string_lossy().as_ref());

            pipeline.add_many([&encoder, &sink])?;
            gst::Element::link_many([upstream, &encoder, &sink])?;
            info!(path = %path.display(), "encoding to file");
        }
        OutputMode::Playback => {
            let sink = make_element("autoaudiosink", "playback-sink")?;

            pipeline.add(&sink)?;
            upstream.link(&sink)?;
            info!("playing through the default audio output");
        }
    }

    Ok(())
}

/// Registers the dynamic pad linker on the decoder. The callback fires on a
/// framework streaming thread, so it only touches the captured sink pad and
/// the already-linked flag, both of which are safe to use from any thread.
fn register_pad_linker(decode: &gst::Element, chain_entry: &gst::Element) -> Result<()> {
    let chain_sink = chain_entry
        .static_pad("sink")
        .ok_or_else(|| NightcoreError::MissingPad(chain_entry.name().to_string()))?;
    let linked = Arc::new(AtomicBool::new(false));

    decode.connect_pad_added(move |_, pad| {
        link_discovered_pad(pad, &chain_sink, &linked);
    });

    Ok(())
}

/// Connects a newly discovered decoder stream into the static chain. Only
/// the first audio stream is linked; further audio streams and any non-audio
/// streams (embedded video, subtitles) are skipped silently.
fn link_discovered_pad(pad: &gst::Pad, chain_sink: &gst::Pad, linked: &AtomicBool) {
    if !pad_is_audio(pad) {
        debug!(pad = %pad.name(), "ignoring non-audio stream");
        return;
    }
    if linked.swap(true, Ordering::SeqCst) {
        debug!(pad = %pad.name(), "chain entry already linked; ignoring extra audio stream");
        return;
    }

    match pad.link(chain_sink) {
        Ok(_) => debug!(pad = %pad.name(), "linked decoded audio into the effect chain"),
        Err(err) => warn!(pad = %pad.name(), %err, "failed to link decoded audio stream"),
    }
}

fn pad_is_audio(pad: &gst::Pad) -> bool {
    let caps = pad
        .current_caps()
        .unwrap_or_else(|| pad.query_caps(None));
    caps_is_audio(&caps)
}

fn caps_is_audio(caps: &gst::CapsRef) -> bool {
    caps.structure(0)
        .is_some_and(|structure| structure.name().starts_with("audio/"))
}
