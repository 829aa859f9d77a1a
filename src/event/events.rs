/// Notifications raised after the sketch session changes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchEvent {
    /// History or the in-progress stroke changed
    DrawingChanged,
    /// The tool preview followed the pointer
    ToolMoved,
    /// Tool, thickness or color selection changed
    ToolChanged,
}
