use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use thiserror::Error;
use wasm_bindgen::{closure::Closure, JsCast};

pub type FrameCallback = Box<dyn FnOnce()>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("No window to schedule frames on")]
    NoWindow,
    #[error("Frame request rejected: {0}")]
    Rejected(String),
}

/// Something that runs a callback once at the next paint opportunity.
pub trait FrameScheduler {
    type Handle: Copy;

    fn request(&self, callback: FrameCallback) -> Result<Self::Handle, FrameError>;
    fn cancel(&self, handle: Self::Handle);
}

/// `requestAnimationFrame` on the current window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserFrames;

impl FrameScheduler for BrowserFrames {
    type Handle = i32;

    fn request(&self, callback: FrameCallback) -> Result<i32, FrameError> {
        let window = web_sys::window().ok_or(FrameError::NoWindow)?;
        let js = Closure::once_into_js(move || callback());
        window
            .request_animation_frame(js.unchecked_ref())
            .map_err(|e| FrameError::Rejected(format!("{e:?}")))
    }

    fn cancel(&self, handle: i32) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

struct Inner<S: FrameScheduler> {
    scheduler: S,
    on_frame: RefCell<Box<dyn FnMut()>>,
    pending: Cell<Option<S::Handle>>,
    alive: Cell<bool>,
}

/// Repeating per-frame task. Each frame runs `on_frame` and books the next one.
///
/// The loop lives exactly as long as this value: dropping it cancels the booked
/// frame, and a callback the scheduler fires anyway finds the loop gone and
/// does nothing.
pub struct FrameLoop<S: FrameScheduler + 'static> {
    inner: Rc<Inner<S>>,
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
    pub fn start(scheduler: S, on_frame: impl FnMut() + 'static) -> Self {
        let inner = Rc::new(Inner {
            scheduler,
            on_frame: RefCell::new(Box::new(on_frame)),
            pending: Cell::new(None),
            alive: Cell::new(true),
        });
        schedule(&inner);
        log::debug!("frame loop started");
        Self { inner }
    }

    pub fn is_scheduled(&self) -> bool {
        self.inner.pending.get().is_some()
    }
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
    fn drop(&mut self) {
        self.inner.alive.set(false);
        if let Some(handle) = self.inner.pending.take() {
            self.inner.scheduler.cancel(handle);
        }
        log::debug!("frame loop stopped");
    }
}

fn schedule<S: FrameScheduler + 'static>(inner: &Rc<Inner<S>>) {
    let weak: Weak<Inner<S>> = Rc::downgrade(inner);
    let requested = inner.scheduler.request(Box::new(move || {
        if let Some(inner) = weak.upgrade() {
            tick(&inner);
        }
    }));
    match requested {
        Ok(handle) => inner.pending.set(Some(handle)),
        Err(e) => {
            // a lost frame only costs the animation, the page keeps working
            inner.pending.set(None);
            log::warn!("frame loop halted: {e}");
        }
    }
}

fn tick<S: FrameScheduler + 'static>(inner: &Rc<Inner<S>>) {
    inner.pending.set(None);
    (*inner.on_frame.borrow_mut())();
    // on_frame may have dropped the loop that owns it
    if inner.alive.get() {
        schedule(inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct FakeFrames {
        queue: Rc<RefCell<Vec<(u32, FrameCallback)>>>,
        next_id: Rc<Cell<u32>>,
        ignore_cancel: bool,
        reject: Rc<Cell<bool>>,
    }

    impl FakeFrames {
        /// Runs every callback booked so far, returns how many ran.
        fn paint(&self) -> usize {
            let batch = std::mem::take(&mut *self.queue.borrow_mut());
            let n = batch.len();
            for (_, cb) in batch {
                cb();
            }
            n
        }

        fn booked(&self) -> usize {
            self.queue.borrow().len()
        }
    }

    impl FrameScheduler for FakeFrames {
        type Handle = u32;

        fn request(&self, callback: FrameCallback) -> Result<u32, FrameError> {
            if self.reject.get() {
                return Err(FrameError::Rejected("test".to_string()));
            }
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            self.queue.borrow_mut().push((id, callback));
            Ok(id)
        }

        fn cancel(&self, handle: u32) {
            if !self.ignore_cancel {
                self.queue.borrow_mut().retain(|(id, _)| *id != handle);
            }
        }
    }

    fn counting_loop(frames: &FakeFrames) -> (FrameLoop<FakeFrames>, Rc<Cell<usize>>) {
        let count = Rc::new(Cell::new(0));
        let c = count.clone();
        let fl = FrameLoop::start(frames.clone(), move || c.set(c.get() + 1));
        (fl, count)
    }

    #[test]
    fn runs_once_per_frame() {
        let frames = FakeFrames::default();
        let (fl, count) = counting_loop(&frames);
        assert!(fl.is_scheduled());
        assert_eq!(count.get(), 0);

        for n in 1..=5 {
            assert_eq!(frames.paint(), 1);
            assert_eq!(count.get(), n);
        }
        assert_eq!(frames.booked(), 1);
    }

    #[test]
    fn drop_cancels_pending_frame() {
        let frames = FakeFrames::default();
        let (fl, count) = counting_loop(&frames);
        frames.paint();
        frames.paint();
        frames.paint();
        drop(fl);

        assert_eq!(frames.booked(), 0);
        assert_eq!(frames.paint(), 0);
        assert_eq!(count.get(), 3);
    }

    #[test]
    fn stray_callback_after_drop_is_inert() {
        let frames = FakeFrames {
            ignore_cancel: true,
            ..Default::default()
        };
        let (fl, count) = counting_loop(&frames);
        frames.paint();
        drop(fl);

        // scheduler still fires the booked callback, nothing happens
        assert_eq!(frames.paint(), 1);
        assert_eq!(count.get(), 1);
        assert_eq!(frames.booked(), 0);
    }

    #[test]
    fn rejected_request_stops_loop() {
        let frames = FakeFrames::default();
        let (fl, count) = counting_loop(&frames);
        frames.reject.set(true);
        frames.paint();

        assert_eq!(count.get(), 1);
        assert!(!fl.is_scheduled());
        assert_eq!(frames.paint(), 0);
    }

    #[test]
    fn drop_from_inside_frame_books_nothing() {
        let frames = FakeFrames::default();
        let count = Rc::new(Cell::new(0));
        let slot: Rc<RefCell<Option<FrameLoop<FakeFrames>>>> = Rc::new(RefCell::new(None));

        let c = count.clone();
        let s = slot.clone();
        let fl = FrameLoop::start(frames.clone(), move || {
            c.set(c.get() + 1);
            drop(s.borrow_mut().take());
        });
        *slot.borrow_mut() = Some(fl);

        assert_eq!(frames.paint(), 1);
        assert_eq!(count.get(), 1);
        assert!(slot.borrow().is_none());
        assert_eq!(frames.booked(), 0);
        assert_eq!(frames.paint(), 0);
    }

    #[test]
    fn rejected_at_start() {
        let frames = FakeFrames::default();
        frames.reject.set(true);
        let (fl, count) = counting_loop(&frames);
        assert!(!fl.is_scheduled());
        assert_eq!(frames.paint(), 0);
        assert_eq!(count.get(), 0);
    }
}
