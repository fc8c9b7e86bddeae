#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    offset_y: f64,
}

impl ScrollState {
    /// Negative (overscroll bounce) and non-finite readings collapse to 0.
    pub fn from_raw(offset_y: f64) -> Self {
        let offset_y = if offset_y.is_finite() { offset_y.max(0.0) } else { 0.0 };
        Self { offset_y }
    }

    pub fn offset_y(self) -> f64 {
        self.offset_y
    }
}

#[cfg(target_arch = "wasm32")]
pub use subscription::ScrollSubscription;

#[cfg(target_arch = "wasm32")]
mod subscription {
    use super::ScrollState;
    use std::{cell::Cell, rc::Rc};
    use wasm_bindgen::{closure::Closure, JsCast};
    use web_sys::{window, Window};

    pub struct ScrollSubscription {
        window: Window,
        listener: Closure<dyn FnMut()>,
        pending_frame: Rc<Cell<Option<i32>>>,
        _on_frame: Rc<Closure<dyn FnMut()>>,
    }

    fn current_offset(window: &Window) -> ScrollState {
        ScrollState::from_raw(window.scroll_y().unwrap_or(0.0))
    }

    impl ScrollSubscription {
        pub fn attach(on_offset: impl Fn(ScrollState) + 'static) -> Result<Self, &'static str> {
            let window = window().ok_or("window unavailable")?;
            let on_offset = Rc::new(on_offset);
            let pending_frame = Rc::new(Cell::new(None));

            let on_frame = {
                let window = window.clone();
                let pending_frame = Rc::clone(&pending_frame);
                let on_offset = Rc::clone(&on_offset);
                Rc::new(Closure::<dyn FnMut()>::new(move || {
                    pending_frame.set(None);
                    on_offset(current_offset(&window));
                }))
            };

            let listener = {
                let window = window.clone();
                let pending_frame = Rc::clone(&pending_frame);
                let on_frame = Rc::clone(&on_frame);
                let on_offset = Rc::clone(&on_offset);
                Closure::<dyn FnMut()>::new(move || {
                    if pending_frame.get().is_some() {
                        return;
                    }

                    match window.request_animation_frame((*on_frame).as_ref().unchecked_ref()) {
                        Ok(handle) => pending_frame.set(Some(handle)),
                        Err(_) => on_offset(current_offset(&window)),
                    }
                })
            };

            window
                .add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref())
                .map_err(|_| "scroll listener rejected")?;

            on_offset(current_offset(&window));

            Ok(Self {
                window,
                listener,
                pending_frame,
                _on_frame: on_frame,
            })
        }
    }

    impl Drop for ScrollSubscription {
        fn drop(&mut self) {
            let _ = self
                .window
                .remove_event_listener_with_callback("scroll", self.listener.as_ref().unchecked_ref());

            if let Some(handle) = self.pending_frame.take() {
                let _ = self.window.cancel_animation_frame(handle);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_never_negative() {
        assert_eq!(ScrollState::from_raw(-32.0).offset_y(), 0.0);
        assert_eq!(ScrollState::from_raw(0.0).offset_y(), 0.0);
        assert_eq!(ScrollState::from_raw(812.5).offset_y(), 812.5);
    }

    #[test]
    fn non_finite_readings_reset_to_top() {
        assert_eq!(ScrollState::from_raw(f64::NAN).offset_y(), 0.0);
        assert_eq!(ScrollState::from_raw(f64::INFINITY).offset_y(), 0.0);
    }

    #[test]
    fn default_state_is_page_top() {
        assert_eq!(ScrollState::default(), ScrollState::from_raw(0.0));
    }
}
