use std::time::Instant;

use smallvec::SmallVec;
use winit::event::{MouseButton, TouchPhase};

use crate::config::{RepeatTiming, TouchPolicy};
use crate::viewport::Viewport;


/// Gesture flags and wheel totals gathered between two updates.
/// One instance is the pending buffer, one is the published snapshot.
#[derive(Debug, Default, Clone, Copy)]
struct EventFlags {
	triggered: bool,
	cancelled: bool,
	moved: bool,
	released: bool,
	wheel_x: f32,
	wheel_y: f32,
}


/// Mouse, touch and pointer gestures unified behind one polling surface.
///
/// Platform callbacks land in the pending buffer in whatever order they
/// arrive; [`PointerTracker::update`] publishes the buffer once per frame
/// and the edge queries read the published copy. Press state is
/// deliberately *not* part of the snapshot: [`PointerTracker::is_pressed`]
/// computes the live OR of the mouse and touch flags, so a release that
/// arrives mid-frame is visible immediately.
#[derive(Debug)]
pub struct PointerTracker {
	pending: EventFlags,
	published: EventFlags,

	mouse_pressed: bool,
	touch_pressed: bool,
	touches: SmallVec<[u64; 4]>,

	cursor: (f64, f64),
	x: i32,
	y: i32,

	pressed_frames: u32,
	last_input_time: Option<Instant>,

	repeat: RepeatTiming,
	policy: TouchPolicy,
}

impl PointerTracker {
	pub fn new(repeat: RepeatTiming, policy: TouchPolicy) -> PointerTracker {
		PointerTracker {
			pending: EventFlags::default(),
			published: EventFlags::default(),

			mouse_pressed: false,
			touch_pressed: false,
			touches: SmallVec::new(),

			cursor: (0.0, 0.0),
			x: 0,
			y: 0,

			pressed_frames: 0,
			last_input_time: None,

			repeat,
			policy,
		}
	}

	/// Per-frame tick. Publishes the pending buffer and advances the hold
	/// counter; the source pressed flags persist until their release event.
	pub fn update(&mut self) {
		self.published = self.pending;
		self.pending = EventFlags::default();

		if self.is_pressed() {
			self.pressed_frames += 1;
		}
	}

	/// Force everything back to neutral. The cached cursor position is
	/// kept; it mirrors the OS cursor, not input state.
	pub fn clear(&mut self) {
		self.pending = EventFlags::default();
		self.published = EventFlags::default();
		self.mouse_pressed = false;
		self.touch_pressed = false;
		self.touches.clear();
		self.x = 0;
		self.y = 0;
		self.pressed_frames = 0;
		self.last_input_time = None;
	}
}

/// Event ingestion. May run any number of times between two updates; only
/// ever writes the pending buffer and the source pressed flags.
impl PointerTracker {
	pub fn on_cursor_moved(&mut self, window_x: f64, window_y: f64, viewport: &Viewport) {
		self.cursor = (window_x, window_y);

		if self.mouse_pressed {
			let x = viewport.to_surface_x(window_x);
			let y = viewport.to_surface_y(window_y);
			self.record_move(x, y);
		}
	}

	pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool, viewport: &Viewport) {
		let (window_x, window_y) = self.cursor;
		let x = viewport.to_surface_x(window_x);
		let y = viewport.to_surface_y(window_y);

		match (button, pressed) {
			(MouseButton::Left, true) => {
				if viewport.contains(x, y) {
					self.mouse_pressed = true;
					self.pressed_frames = 0;
					self.record_trigger(x, y);
				}
			}

			(MouseButton::Left, false) => {
				self.mouse_pressed = false;
				self.record_release(x, y);
			}

			(MouseButton::Right, true) => {
				if viewport.contains(x, y) {
					self.record_cancel(x, y);
				}
			}

			// Reserved.
			(MouseButton::Middle, _) => {}

			_ => {}
		}
	}

	/// Wheel deltas accumulate across events within a frame.
	pub fn on_wheel(&mut self, delta_x: f32, delta_y: f32) {
		self.pending.wheel_x += delta_x;
		self.pending.wheel_y += delta_y;
	}

	pub fn on_touch(&mut self, id: u64, phase: TouchPhase, window_x: f64, window_y: f64, viewport: &Viewport) {
		let x = viewport.to_surface_x(window_x);
		let y = viewport.to_surface_y(window_y);

		match phase {
			TouchPhase::Started => {
				if !self.touches.contains(&id) {
					self.touches.push(id);
				}

				if viewport.contains(x, y) {
					self.touch_pressed = true;
					self.pressed_frames = 0;

					if self.touches.len() >= 2 && self.policy.two_finger_cancel {
						self.record_cancel(x, y);
					} else {
						self.record_trigger(x, y);
					}
				}
			}

			// Contact movement is reported whether or not the press landed
			// on the surface.
			TouchPhase::Moved => self.record_move(x, y),

			TouchPhase::Ended => {
				self.touches.retain(|touch| *touch != id);

				if self.touches.is_empty() {
					self.touch_pressed = false;
					self.record_release(x, y);
				}
			}

			// An interrupted gesture is not a release; only the pressed
			// flag drops.
			TouchPhase::Cancelled => {
				self.touches.retain(|touch| *touch != id);

				if self.touches.is_empty() {
					self.touch_pressed = false;
				}
			}
		}
	}

	/// Compatibility path for hosts that report extra contacts as
	/// non-primary pointers instead of touch events.
	pub fn on_secondary_pointer(&mut self, window_x: f64, window_y: f64, viewport: &Viewport) {
		if !self.policy.secondary_pointer_cancel {
			return;
		}

		let x = viewport.to_surface_x(window_x);
		let y = viewport.to_surface_y(window_y);

		if viewport.contains(x, y) {
			self.record_cancel(x, y);
		}
	}

	fn record_trigger(&mut self, x: i32, y: i32) {
		self.pending.triggered = true;
		self.x = x;
		self.y = y;
		self.last_input_time = Some(Instant::now());
	}

	fn record_cancel(&mut self, x: i32, y: i32) {
		self.pending.cancelled = true;
		self.x = x;
		self.y = y;
	}

	fn record_move(&mut self, x: i32, y: i32) {
		self.pending.moved = true;
		self.x = x;
		self.y = y;
	}

	fn record_release(&mut self, x: i32, y: i32) {
		self.pending.released = true;
		self.x = x;
		self.y = y;
	}
}

/// Query surface; everything except `is_pressed` reads the snapshot taken
/// by the last update.
impl PointerTracker {
	/// Live OR of the two source flags.
	pub fn is_pressed(&self) -> bool {
		self.mouse_pressed || self.touch_pressed
	}

	pub fn is_triggered(&self) -> bool {
		self.published.triggered
	}

	pub fn is_cancelled(&self) -> bool {
		self.published.cancelled
	}

	pub fn is_moved(&self) -> bool {
		self.published.moved
	}

	pub fn is_released(&self) -> bool {
		self.published.released
	}

	pub fn is_repeated(&self) -> bool {
		self.is_pressed()
			&& (self.published.triggered || self.repeat.repeats(self.pressed_frames))
	}

	pub fn is_long_pressed(&self) -> bool {
		self.is_pressed() && self.repeat.is_long(self.pressed_frames)
	}

	/// Surface-local coordinates of the last recorded gesture event.
	pub fn x(&self) -> i32 {
		self.x
	}

	pub fn y(&self) -> i32 {
		self.y
	}

	pub fn wheel_x(&self) -> f32 {
		self.published.wheel_x
	}

	pub fn wheel_y(&self) -> f32 {
		self.published.wheel_y
	}

	pub fn last_input_time(&self) -> Option<Instant> {
		self.last_input_time
	}
}
