/// Per-loop decisions for rendering and terminal resizes
pub struct Coalescer;

impl Coalescer {
    /// Whether to render this loop based on coalesced inputs
    #[inline]
    pub fn decide_render(queued_render_reqs: usize, saw_tui_render: bool) -> bool {
        queued_render_reqs > 0 || saw_tui_render
    }

    /// Only the last resize of a loop is applied
    #[inline]
    pub fn decide_resize(events: &[(u16, u16)]) -> Option<(u16, u16)> {
        events.last().copied()
    }
}
