/// Marker for events a reducer consumes: key presses, AI completions, ticks.
pub trait Intent: Send + 'static {}
