use super::geometry::Point;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};

/// Per-block drag tracking.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// `offset` is pointer minus block corner at press time, held for the whole drag.
    Dragging { offset: Point },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn press(&mut self, pointer: Point, block: Point) {
        *self = DragState::Dragging {
            offset: pointer - block,
        };
    }

    /// Where the block's corner belongs for this pointer, or `None` while idle.
    pub fn motion(&self, pointer: Point) -> Option<Point> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { offset } => Some(pointer - *offset),
        }
    }

    /// Returns whether a drag was actually in progress.
    pub fn release(&mut self) -> bool {
        std::mem::take(self).is_dragging()
    }
}

/// Window-level `mousemove`/`mouseup` listeners, detached when dropped.
pub struct PointerSubscription {
    _on_move: EventListener,
    _on_up: EventListener,
}

impl PointerSubscription {
    /// `None` when there is no browser window to listen on.
    pub fn acquire(
        mut on_move: impl FnMut(Point) + 'static,
        mut on_up: impl FnMut() + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let on_move = EventListener::new(&window, "mousemove", move |event: &Event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                on_move(Point::new(
                    f64::from(event.client_x()),
                    f64::from(event.client_y()),
                ));
            }
        });
        let on_up = EventListener::new(&window, "mouseup", move |_: &Event| on_up());
        Some(Self {
            _on_move: on_move,
            _on_up: on_up,
        })
    }
}

/// Drops the subscription in `slot` once `state` is idle. Returns whether one was dropped.
pub fn release_when_idle(state: DragState, slot: &mut Option<PointerSubscription>) -> bool {
    !state.is_dragging() && slot.take().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn idle_ignores_motion() {
        let state = DragState::default();
        assert!(!state.is_dragging());
        assert_eq!(state.motion(Point::new(10.0, 10.0)), None);
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let block = Point::new(200.0, 150.0);
        let mut state = DragState::Idle;
        state.press(Point::new(230.0, 190.0), block);
        assert_eq!(
            state,
            DragState::Dragging {
                offset: Point::new(30.0, 40.0)
            }
        );

        // pressing without moving must not make the block jump
        assert_eq!(state.motion(Point::new(230.0, 190.0)), Some(block));
        assert_eq!(state.motion(Point::new(500.0, 20.0)), Some(Point::new(470.0, -20.0)));
    }

    #[test]
    fn release_returns_to_idle() {
        let mut state = DragState::Idle;
        assert!(!state.release());

        state.press(Point::new(1.0, 1.0), Point::default());
        assert!(state.release());
        assert_eq!(state, DragState::Idle);
        assert_eq!(state.motion(Point::new(50.0, 50.0)), None);
    }

    #[test]
    fn empty_slot_has_nothing_to_release() {
        let mut slot = None;
        assert!(!release_when_idle(DragState::Idle, &mut slot));
    }

    #[test]
    fn new_press_records_fresh_offset() {
        let mut state = DragState::Idle;
        state.press(Point::new(10.0, 10.0), Point::new(0.0, 0.0));
        state.release();
        state.press(Point::new(110.0, 60.0), Point::new(100.0, 20.0));
        assert_eq!(state.motion(Point::new(110.0, 60.0)), Some(Point::new(100.0, 20.0)));
    }
}
