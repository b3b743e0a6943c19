//! Pad polling support.
//!
//! Sticks are binarized against a fixed threshold and folded into the four
//! d-pad slots of the raw state, so an axis crossing the threshold produces
//! the same edge a physical d-pad press would. Each slot's binarized state
//! is cached between polls and only *changes* write through to the shared
//! logical-button table; an index that didn't change never overwrites what
//! another source wrote there.

use crate::buttons::ButtonSet;
use crate::keys;


/// Controller slots tracked for edge detection.
pub const PAD_SLOTS: usize = 4;

/// Raw state slots per pad: 0-5 face/shoulder buttons, 6-11 unmapped,
/// 12-15 d-pad. The d-pad slots also receive synthesized stick directions.
pub const PAD_BUTTONS: usize = 16;

/// Magnitude a stick axis must exceed to register as a direction.
pub const AXIS_THRESHOLD: f32 = 0.5;

const DPAD_UP: usize = 12;
const DPAD_DOWN: usize = 13;
const DPAD_LEFT: usize = 14;
const DPAD_RIGHT: usize = 15;


/// One polled controller state. Axes are y-down: positive `axes[1]` means
/// the stick is deflected toward the bottom of the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct PadSnapshot {
	pub connected: bool,
	pub buttons: [bool; PAD_BUTTONS],
	pub axes: [f32; 2],
}

impl PadSnapshot {
	pub fn with_button(index: usize, held: bool) -> PadSnapshot {
		let mut pad = PadSnapshot { connected: true, ..Default::default() };
		pad.buttons[index] = held;
		pad
	}

	pub fn with_axes(x: f32, y: f32) -> PadSnapshot {
		PadSnapshot { connected: true, axes: [x, y], ..Default::default() }
	}
}


/// Last binarized state per controller slot, kept across frames.
#[derive(Debug)]
pub struct PadCache {
	states: [[bool; PAD_BUTTONS]; PAD_SLOTS],
}

impl Default for PadCache {
	fn default() -> PadCache {
		PadCache { states: [[false; PAD_BUTTONS]; PAD_SLOTS] }
	}
}

impl PadCache {
	pub fn clear(&mut self) {
		self.states = [[false; PAD_BUTTONS]; PAD_SLOTS];
	}

	/// Fold one frame of snapshots into the current button generation.
	pub fn apply(&mut self, pads: &[PadSnapshot], current: &mut ButtonSet) {
		for (slot, pad) in pads.iter().take(PAD_SLOTS).enumerate() {
			let last = &mut self.states[slot];

			if !pad.connected {
				// Release anything this slot was holding so a yanked cable
				// can't leave a direction stuck.
				for index in 0..PAD_BUTTONS {
					if last[index] && let Some(button) = keys::map_pad_index(index) {
						current.set(button, false);
					}
				}

				*last = [false; PAD_BUTTONS];
				continue;
			}

			let fresh = binarize(pad);

			for index in 0..PAD_BUTTONS {
				if fresh[index] == last[index] {
					continue;
				}

				if let Some(button) = keys::map_pad_index(index) {
					current.set(button, fresh[index]);
				}
			}

			*last = fresh;
		}
	}
}

fn binarize(pad: &PadSnapshot) -> [bool; PAD_BUTTONS] {
	let mut state = pad.buttons;
	let [x, y] = pad.axes;

	// Stick deflection only ever forces a d-pad slot true; inside the
	// deadzone the real d-pad bits pass through untouched.
	state[DPAD_UP] |= y < -AXIS_THRESHOLD;
	state[DPAD_DOWN] |= y > AXIS_THRESHOLD;
	state[DPAD_LEFT] |= x < -AXIS_THRESHOLD;
	state[DPAD_RIGHT] |= x > AXIS_THRESHOLD;

	state
}


#[cfg(feature = "gamepad")]
pub mod poll {
	use gilrs::{Axis, Button as PadButton, Gilrs};

	use super::{PAD_SLOTS, PadSnapshot};

	const BUTTONS: [PadButton; 6] = [
		PadButton::South,
		PadButton::East,
		PadButton::West,
		PadButton::North,
		PadButton::LeftTrigger,
		PadButton::RightTrigger,
	];

	const DPAD: [(PadButton, usize); 4] = [
		(PadButton::DPadUp, 12),
		(PadButton::DPadDown, 13),
		(PadButton::DPadLeft, 14),
		(PadButton::DPadRight, 15),
	];

	/// Pull a fresh snapshot for every connected pad, in enumeration order.
	pub fn snapshots(gil: &mut Gilrs) -> [PadSnapshot; PAD_SLOTS] {
		// Drain the event queue so the cached gamepad state is current.
		while gil.next_event().is_some() {}

		let mut pads = [PadSnapshot::default(); PAD_SLOTS];

		for (slot, (_id, gamepad)) in gil.gamepads().take(PAD_SLOTS).enumerate() {
			let pad = &mut pads[slot];
			pad.connected = gamepad.is_connected();

			for (index, &button) in BUTTONS.iter().enumerate() {
				pad.buttons[index] = gamepad.is_pressed(button);
			}

			for (button, index) in DPAD {
				pad.buttons[index] = gamepad.is_pressed(button);
			}

			// gilrs reports stick y as up-positive; flip to y-down.
			pad.axes = [
				gamepad.value(Axis::LeftStickX),
				-gamepad.value(Axis::LeftStickY),
			];
		}

		pads
	}
}


#[cfg(test)]
mod test {
	use super::*;
	use crate::buttons::Button;

	#[test]
	fn button_press_writes_through() {
		let mut cache = PadCache::default();
		let mut current = ButtonSet::default();

		cache.apply(&[PadSnapshot::with_button(0, true)], &mut current);
		assert!(current.get(Button::Ok));

		cache.apply(&[PadSnapshot::with_button(0, false)], &mut current);
		assert!(!current.get(Button::Ok));
	}

	#[test]
	fn unchanged_state_does_not_overwrite() {
		let mut cache = PadCache::default();
		let mut current = ButtonSet::default();

		cache.apply(&[PadSnapshot::with_button(0, true)], &mut current);

		// Another source releases the logical button; the pad's unchanged
		// held state must not resurrect it.
		current.set(Button::Ok, false);
		cache.apply(&[PadSnapshot::with_button(0, true)], &mut current);
		assert!(!current.get(Button::Ok));
	}

	#[test]
	fn axis_crossing_presses_and_releases() {
		let mut cache = PadCache::default();
		let mut current = ButtonSet::default();

		cache.apply(&[PadSnapshot::with_axes(0.0, 0.8)], &mut current);
		assert!(current.get(Button::Down));
		assert!(!current.get(Button::Up));

		cache.apply(&[PadSnapshot::with_axes(0.0, 0.0)], &mut current);
		assert!(!current.get(Button::Down));

		cache.apply(&[PadSnapshot::with_axes(-0.9, -0.9)], &mut current);
		assert!(current.get(Button::Up));
		assert!(current.get(Button::Left));
	}

	#[test]
	fn deadzone_is_neutral() {
		let mut cache = PadCache::default();
		let mut current = ButtonSet::default();

		cache.apply(&[PadSnapshot::with_axes(0.4, -0.4)], &mut current);
		assert!(!current.get(Button::Left));
		assert!(!current.get(Button::Right));
		assert!(!current.get(Button::Up));
		assert!(!current.get(Button::Down));
	}

	#[test]
	fn dpad_and_stick_share_slots() {
		let mut cache = PadCache::default();
		let mut current = ButtonSet::default();

		// Physical d-pad down.
		cache.apply(&[PadSnapshot::with_button(13, true)], &mut current);
		assert!(current.get(Button::Down));

		// Stick joins in on the same slot: still held, no spurious edge.
		let mut pad = PadSnapshot::with_button(13, true);
		pad.axes = [0.0, 0.9];
		cache.apply(&[pad], &mut current);
		assert!(current.get(Button::Down));

		// D-pad releases while the stick still points down: slot stays true.
		cache.apply(&[PadSnapshot::with_axes(0.0, 0.9)], &mut current);
		assert!(current.get(Button::Down));

		// Stick returns to center: now the slot finally releases.
		cache.apply(&[PadSnapshot::with_axes(0.0, 0.0)], &mut current);
		assert!(!current.get(Button::Down));
	}

	#[test]
	fn disconnect_releases_held_buttons() {
		let mut cache = PadCache::default();
		let mut current = ButtonSet::default();

		cache.apply(&[PadSnapshot::with_axes(0.0, 0.8)], &mut current);
		assert!(current.get(Button::Down));

		cache.apply(&[PadSnapshot::default()], &mut current);
		assert!(!current.get(Button::Down));
	}

	#[test]
	fn unmapped_indices_are_ignored() {
		let mut cache = PadCache::default();
		let mut current = ButtonSet::default();

		cache.apply(&[PadSnapshot::with_button(7, true)], &mut current);
		assert_eq!(current, ButtonSet::default());
	}

	#[test]
	fn slots_are_independent() {
		let mut cache = PadCache::default();
		let mut current = ButtonSet::default();

		let pads = [
			PadSnapshot::with_button(0, true),
			PadSnapshot::with_button(1, true),
		];
		cache.apply(&pads, &mut current);
		assert!(current.get(Button::Ok));
		assert!(current.get(Button::Cancel));

		// Releasing on one slot leaves the other's contribution alone.
		let pads = [
			PadSnapshot::with_button(0, false),
			PadSnapshot::with_button(1, true),
		];
		cache.apply(&pads, &mut current);
		assert!(!current.get(Button::Ok));
		assert!(current.get(Button::Cancel));
	}
}
