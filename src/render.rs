// Render boundary: the shared palette, the model-to-pixel mapping, and the
// PNG snapshot writer. The egui view and the snapshot both read from here so
// the interactive frame and the exported file agree on colors and geometry.

pub mod frame;
pub mod palette;
pub mod snapshot;
