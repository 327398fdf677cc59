use gstreamer as gst;

/// Result alias that carries the custom [`NightcoreError`] type.
pub type Result<T> = std::result::Result<T, NightcoreError>;

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum NightcoreError {
    /// GStreamer itself could not be initialised.
    #[error("failed to initialise GStreamer: {0}")]
    Init(#[from] gst::glib::Error),
    /// The element factory could not produce the named element type. This is
    /// always fatal: a missing plugin will not appear during the run.
    #[error("failed to create pipeline element '{0}'; are all required GStreamer plugins installed?")]
    ElementUnavailable(String),
    /// Linking two statically known pads failed.
    #[error("failed to link pipeline elements: {0}")]
    Link(#[from] gst::glib::BoolError),
    /// The pipeline refused a state transition.
    #[error("pipeline state change failed: {0}")]
    StateChange(#[from] gst::StateChangeError),
    /// An element is missing a pad the pipeline relies on.
    #[error("element '{0}' has no static sink pad")]
    MissingPad(String),
    /// The pipeline exposes no status bus.
    #[error("pipeline has no status bus")]
    MissingBus,
    /// Installing the status-bus watch failed.
    #[error("failed to install status bus watch: {0}")]
    Watch(gst::glib::BoolError),
    /// A runtime error delivered on the status bus while the pipeline ran.
    #[error("{0}")]
    Stream(String),
}
