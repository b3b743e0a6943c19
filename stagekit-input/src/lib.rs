//! Input-state normalization: raw keyboard, gamepad, mouse and touch events
//! in; stable per-frame button, direction and pointer signals out.
//!
//! Two components share the same shape. Platform callbacks write into
//! component-owned pending state whenever they fire; a single
//! [`System::update`] per simulation frame promotes that state into the
//! read-only view the rest of the engine polls. Nothing in here raises
//! errors: unmapped codes, events outside the render surface and missing
//! gamepad support all degrade to silent no-ops.

use winit::event::{MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

pub mod buttons;
pub mod config;
pub mod direction;
pub mod gamepad;
pub mod keys;
pub mod pointer;
pub mod tracker;
pub mod viewport;

pub mod prelude {
	pub use crate::System;
	pub use crate::buttons::Button;
}

pub use buttons::Button;
pub use config::{InputConfig, RepeatTiming, TouchPolicy};
pub use gamepad::{PAD_SLOTS, PadSnapshot};
pub use pointer::PointerTracker;
pub use tracker::ButtonTracker;
pub use viewport::Viewport;
pub use winit::event::{MouseButton, TouchPhase};


/// Wheel line deltas are published in pixel units.
const WHEEL_LINE_PIXELS: f32 = 20.0;


pub struct System {
	pub buttons: ButtonTracker,
	pub pointer: PointerTracker,
	pub viewport: Viewport,

	#[cfg(feature = "gamepad")]
	gil: Option<gilrs::Gilrs>,
}

impl System {
	#[tracing::instrument(name = "input init", skip_all)]
	pub fn new(config: InputConfig) -> System {
		System {
			buttons: ButtonTracker::new(config.repeat),
			pointer: PointerTracker::new(config.repeat, config.touch),
			viewport: Viewport::default(),

			#[cfg(feature = "gamepad")]
			gil: match gilrs::Gilrs::new() {
				Ok(gil) => {
					log::info!("Gamepad polling enabled ({} connected)", gil.gamepads().count());
					Some(gil)
				}
				Err(err) => {
					log::warn!("Gamepad support unavailable: {err}");
					None
				}
			},
		}
	}

	/// Promote everything received since the last call.
	/// Must run exactly once per simulation frame, on the event-loop thread.
	pub fn update(&mut self) {
		let pads = self.poll_pads();
		self.buttons.update(&pads);
		self.pointer.update();
	}

	/// Force every signal back to neutral. Used on focus loss and similar
	/// host interruptions so nothing stays held across the gap.
	pub fn clear(&mut self) {
		log::debug!("input state cleared");
		self.buttons.clear();
		self.pointer.clear();
	}

	#[cfg(feature = "gamepad")]
	fn poll_pads(&mut self) -> [PadSnapshot; PAD_SLOTS] {
		match self.gil.as_mut() {
			Some(gil) => gamepad::poll::snapshots(gil),
			None => Default::default(),
		}
	}

	#[cfg(not(feature = "gamepad"))]
	fn poll_pads(&mut self) -> [PadSnapshot; PAD_SLOTS] {
		Default::default()
	}
}

/// Event fan-in. The winit entry point only destructures; each event kind
/// lands in a small handler so the translation layer can be exercised
/// without fabricating winit event structs.
impl System {
	pub fn on_window_event(&mut self, event: &WindowEvent) {
		match event {
			WindowEvent::KeyboardInput { event, .. } => {
				if let PhysicalKey::Code(code) = event.physical_key {
					self.on_key(code, event.state.is_pressed());
				}
			}

			WindowEvent::MouseInput { button, state, .. } => {
				self.on_mouse_button(*button, state.is_pressed());
			}

			WindowEvent::CursorMoved { position, .. } => {
				self.on_cursor_moved(position.x, position.y);
			}

			WindowEvent::MouseWheel { delta, .. } => self.on_wheel(*delta),

			WindowEvent::Touch(touch) => {
				self.on_touch(touch.id, touch.phase, touch.location.x, touch.location.y);
			}

			WindowEvent::Focused(false) => self.clear(),

			_ => {}
		}
	}

	pub fn on_key(&mut self, code: KeyCode, pressed: bool) {
		// A numlock toggle reshuffles what the numpad keys report on some
		// hosts; drop the keyboard state rather than risk a stuck button.
		if code == KeyCode::NumLock && pressed {
			self.buttons.clear();
			return;
		}

		if let Some(button) = keys::map_key(code) {
			self.buttons.track(button, pressed);
		}
	}

	pub fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) {
		self.pointer.on_mouse_button(button, pressed, &self.viewport);
	}

	pub fn on_cursor_moved(&mut self, x: f64, y: f64) {
		self.pointer.on_cursor_moved(x, y, &self.viewport);
	}

	pub fn on_wheel(&mut self, delta: MouseScrollDelta) {
		// Publish y-down pixel deltas regardless of how the host reports
		// scrolling.
		let (x, y) = match delta {
			MouseScrollDelta::LineDelta(x, y) => {
				(x * WHEEL_LINE_PIXELS, -y * WHEEL_LINE_PIXELS)
			}
			MouseScrollDelta::PixelDelta(position) => {
				(position.x as f32, -position.y as f32)
			}
		};

		self.pointer.on_wheel(x, y);
	}

	pub fn on_touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) {
		self.pointer.on_touch(id, phase, x, y, &self.viewport);
	}

	/// Compatibility entry point for hosts that report extra touch contacts
	/// as non-primary pointers.
	pub fn on_secondary_pointer(&mut self, x: f64, y: f64) {
		self.pointer.on_secondary_pointer(x, y, &self.viewport);
	}
}


#[cfg(test)]
mod test {
	use super::*;

	fn system() -> System {
		let mut system = System::new(InputConfig::default());
		system.viewport = Viewport::new(100, 100);
		system
	}

	#[test]
	fn key_events_reach_the_tracker() {
		let mut input = system();

		input.on_key(KeyCode::KeyZ, true);
		input.update();
		assert!(input.buttons.is_triggered(Button::Ok));

		input.on_key(KeyCode::KeyZ, false);
		input.update();
		assert!(!input.buttons.is_pressed(Button::Ok));
	}

	#[test]
	fn unmapped_keys_change_nothing() {
		let mut input = system();

		input.on_key(KeyCode::KeyA, true);
		input.update();
		assert_eq!(input.buttons.latest(), None);
	}

	#[test]
	fn numlock_drops_keyboard_state() {
		let mut input = system();

		input.on_key(KeyCode::ArrowDown, true);
		input.update();
		assert!(input.buttons.is_pressed(Button::Down));

		input.on_key(KeyCode::NumLock, true);
		input.update();
		assert!(!input.buttons.is_pressed(Button::Down));
		assert_eq!(input.buttons.dir4(), 0);
	}

	#[test]
	fn escape_key_opens_the_cancel_alias() {
		let mut input = system();

		input.on_key(KeyCode::Escape, true);
		input.update();
		assert!(input.buttons.is_pressed(Button::Cancel));
		assert!(input.buttons.is_triggered(Button::Menu));
	}

	#[test]
	fn line_wheel_deltas_become_pixels() {
		let mut input = system();

		input.on_wheel(MouseScrollDelta::LineDelta(0.0, -1.0));
		input.on_wheel(MouseScrollDelta::LineDelta(0.0, -1.0));
		input.update();

		// Two lines toward the user: positive y, in pixels.
		assert_eq!(input.pointer.wheel_y(), 2.0 * WHEEL_LINE_PIXELS);
	}

	#[test]
	fn click_flows_through_the_viewport() {
		let mut input = system();

		input.on_cursor_moved(40.0, 40.0);
		input.on_mouse_button(MouseButton::Left, true);
		input.update();
		assert!(input.pointer.is_triggered());

		// Same event stream, but the surface has gone away.
		let mut input = system();
		input.viewport = Viewport::default();
		input.on_cursor_moved(40.0, 40.0);
		input.on_mouse_button(MouseButton::Left, true);
		input.update();
		assert!(!input.pointer.is_triggered());
	}

	#[test]
	fn clear_resets_both_components() {
		let mut input = system();

		input.on_key(KeyCode::ArrowLeft, true);
		input.on_cursor_moved(10.0, 10.0);
		input.on_mouse_button(MouseButton::Left, true);
		input.update();

		input.clear();
		input.update();

		assert_eq!(input.buttons.dir8(), 0);
		assert_eq!(input.buttons.latest(), None);
		assert!(!input.pointer.is_pressed());
		assert!(!input.pointer.is_triggered());
	}
}
