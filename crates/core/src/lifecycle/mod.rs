use std::sync::{Arc, Mutex};

use gstreamer as gst;
use gstreamer::glib;
use gstreamer::prelude::*;
use tracing::{debug, warn};

use crate::{NightcoreError, Result};

/// Terminal conditions delivered on the pipeline's status bus. Exactly one
/// is consumed per run; nothing else stops the control loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusEvent {
    /// The input has been processed to completion.
    EndOfStream,
    /// The framework reported an unrecoverable streaming error.
    Error(String),
}

/// Lifecycle of a single pipeline run. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Stopped,
}

/// Drives a pipeline from start to teardown on a single control thread.
///
/// The controller blocks in a GLib main loop; the bus watch translates
/// end-of-stream and error messages into a [`StatusEvent`] and quits the
/// loop. Status events are dispatched serially on the control thread, so the
/// shared event slot sees no contention beyond the watch closure itself.
pub struct PipelineController {
    pipeline: gst::Pipeline,
    state: RunState,
}

impl PipelineController {
    pub fn new(pipeline: gst::Pipeline) -> Self {
        Self {
            pipeline,
            state: RunState::Idle,
        }
    }

    /// Returns the controller's current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Starts the pipeline and blocks until a terminal status event arrives,
    /// then tears the graph down. An end-of-stream maps to `Ok(())`; a
    /// runtime streaming error maps to [`NightcoreError::Stream`] after
    /// teardown has completed.
    pub fn run(mut self) -> Result<()> {
        let bus = self.pipeline.bus().ok_or(NightcoreError::MissingBus)?;
        let main_loop = glib::MainLoop::new(None, false);
        let outcome: Arc<Mutex<Option<StatusEvent>>> = Arc::new(Mutex::new(None));

        let watch = {
            let main_loop = main_loop.clone();
            let outcome = Arc::clone(&outcome);
            bus.add_watch(move |_, message| {
                if let Some(event) = status_event(message) {
                    if let Ok(mut slot) = outcome.lock() {
                        slot.get_or_insert(event);
                    }
                    main_loop.quit();
                }
                glib::ControlFlow::Continue
            })
            .map_err(NightcoreError::Watch)?
        };

        self.pipeline.set_state(gst::State::Playing)?;
        self.state = RunState::Running;
        debug!("pipeline playing; waiting for a terminal status event");

        main_loop.run();

        // Teardown order matters: stop the graph before removing the bus
        // watch so no further status events reach a torn-down loop. A refused
        // Null transition is logged rather than returned so it cannot mask a
        // recorded status event.
        if let Err(err) = self.pipeline.set_state(gst::State::Null) {
            warn!(%err, "pipeline refused the shutdown transition");
        }
        drop(self.pipeline);
        drop(watch);
        drop(main_loop);
        self.state = RunState::Stopped;
        debug!("pipeline stopped");

        let event = outcome.lock().ok().and_then(|mut slot| slot.take());
        terminal_result(event)
    }
}

fn status_event(message: &gst::Message) -> Option<StatusEvent> {
    match message.view() {
        gst::MessageView::Eos(..) => Some(StatusEvent::EndOfStream),
        gst::MessageView::Error(err) => {
            if let Some(details) = err.debug() {
                debug!(%details, "streaming error details");
            }
            Some(StatusEvent::Error(err.error().to_string()))
        }
        _ => None,
    }
}

fn terminal_result(event: Option<StatusEvent>) -> Result<()> {
    match event {
        Some(StatusEvent::Error(message)) => Err(NightcoreError::Stream(message)),
        Some(StatusEvent::EndOfStream) | None => Ok(()),
    }
}
