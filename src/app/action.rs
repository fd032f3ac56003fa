#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Republish a settled transition on the event bus.
    Publish {
        slider_id: String,
        slide_index: usize,
    },
    Quit,
}
