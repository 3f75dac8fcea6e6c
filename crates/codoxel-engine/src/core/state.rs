/// Lifecycle of a [`Scene`](super::Scene) within its window.
///
/// ```text
/// Uninitialized -> Ready <-> Rendering
///        \           |          /
///         +------> Closed <----+
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum SceneState {
    #[default]
    Uninitialized,
    Ready,
    Rendering,
    Closed,
}

impl SceneState {
    /// `on_load` may only run once, before anything else.
    pub fn can_load(self) -> bool {
        self == Self::Uninitialized
    }

    /// Marks a successful `on_load`.
    pub fn loaded(&mut self) -> bool {
        self.advance(Self::Uninitialized, Self::Ready)
    }

    /// Enters `Rendering`; returns `false` when no frame may be rendered now.
    pub fn begin_frame(&mut self) -> bool {
        self.advance(Self::Ready, Self::Rendering)
    }

    pub fn end_frame(&mut self) -> bool {
        self.advance(Self::Rendering, Self::Ready)
    }

    pub fn accepts_resize(self) -> bool {
        self == Self::Ready
    }

    /// Enters the terminal state. Returns `true` only on the first call, which
    /// is when `on_close` must fire.
    pub fn close(&mut self) -> bool {
        if *self == Self::Closed {
            return false;
        }
        *self = Self::Closed;
        true
    }

    fn advance(&mut self, from: Self, to: Self) -> bool {
        if *self != from {
            log::debug!("ignored scene transition {self:?} -> {to:?}");
            return false;
        }
        *self = to;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_lifecycle() {
        let mut state = SceneState::default();
        assert!(state.can_load());
        assert!(!state.accepts_resize());
        assert!(!state.begin_frame());

        assert!(state.loaded());
        assert!(!state.can_load());
        assert!(state.accepts_resize());

        for _ in 0..3 {
            assert!(state.begin_frame());
            assert_eq!(state, SceneState::Rendering);
            assert!(!state.accepts_resize());
            assert!(state.end_frame());
        }

        assert!(state.close());
        assert_eq!(state, SceneState::Closed);
    }

    #[test]
    fn load_happens_once() {
        let mut state = SceneState::default();
        assert!(state.loaded());
        assert!(!state.loaded());
        assert_eq!(state, SceneState::Ready);
    }

    #[test]
    fn closed_is_terminal() {
        let mut state = SceneState::Ready;
        assert!(state.close());
        assert!(!state.close());
        assert!(!state.loaded());
        assert!(!state.begin_frame());
        assert!(!state.end_frame());
        assert!(!state.accepts_resize());
        assert!(!state.can_load());
    }

    #[test]
    fn failed_load_can_close() {
        let mut state = SceneState::Uninitialized;
        assert!(state.close());
        assert!(!state.begin_frame());
    }
}
