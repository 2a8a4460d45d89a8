/// Marker for reducer-owned state.
///
/// `Default` is the resting state; `PartialEq` lets tests and the renderer
/// compare snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
