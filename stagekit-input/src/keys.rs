use winit::keyboard::KeyCode;

use crate::buttons::Button;


/// Translate a physical key into its logical button, if it has one.
///
/// The table is many-to-one on purpose: a menu-driven game wants several
/// physical keys to land on the same semantic role. Anything unlisted maps
/// to `None` and is ignored by the caller.
pub fn map_key(code: KeyCode) -> Option<Button> {
	match code {
		KeyCode::Tab => Some(Button::Tab),

		KeyCode::Enter
		| KeyCode::NumpadEnter
		| KeyCode::Space
		| KeyCode::KeyZ => Some(Button::Ok),

		KeyCode::ShiftLeft
		| KeyCode::ShiftRight => Some(Button::Shift),

		KeyCode::ControlLeft
		| KeyCode::ControlRight
		| KeyCode::AltLeft
		| KeyCode::AltRight => Some(Button::Control),

		KeyCode::Escape
		| KeyCode::Insert
		| KeyCode::KeyX
		| KeyCode::Numpad0 => Some(Button::Escape),

		KeyCode::PageUp | KeyCode::KeyQ => Some(Button::PageUp),
		KeyCode::PageDown | KeyCode::KeyW => Some(Button::PageDown),

		KeyCode::ArrowLeft | KeyCode::Numpad4 => Some(Button::Left),
		KeyCode::ArrowUp | KeyCode::Numpad8 => Some(Button::Up),
		KeyCode::ArrowRight | KeyCode::Numpad6 => Some(Button::Right),
		KeyCode::ArrowDown | KeyCode::Numpad2 => Some(Button::Down),

		KeyCode::F9 => Some(Button::Debug),

		_ => None,
	}
}

/// Translate a raw pad state index into its logical button.
///
/// Indices 0-5 are the face and shoulder buttons of a standard-mapping pad;
/// 12-15 are the d-pad slots, which also receive synthesized stick
/// directions (see [`crate::gamepad`]). Everything else maps to `None`.
pub fn map_pad_index(index: usize) -> Option<Button> {
	match index {
		0 => Some(Button::Ok),
		1 => Some(Button::Cancel),
		2 => Some(Button::Shift),
		3 => Some(Button::Menu),
		4 => Some(Button::PageUp),
		5 => Some(Button::PageDown),

		12 => Some(Button::Up),
		13 => Some(Button::Down),
		14 => Some(Button::Left),
		15 => Some(Button::Right),

		_ => None,
	}
}


#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn confirm_keys_share_a_role() {
		assert_eq!(map_key(KeyCode::Enter), Some(Button::Ok));
		assert_eq!(map_key(KeyCode::Space), Some(Button::Ok));
		assert_eq!(map_key(KeyCode::KeyZ), Some(Button::Ok));
	}

	#[test]
	fn alt_acts_as_control() {
		assert_eq!(map_key(KeyCode::AltLeft), Some(Button::Control));
		assert_eq!(map_key(KeyCode::ControlRight), Some(Button::Control));
	}

	#[test]
	fn numpad_doubles_as_arrows() {
		assert_eq!(map_key(KeyCode::Numpad2), Some(Button::Down));
		assert_eq!(map_key(KeyCode::Numpad4), Some(Button::Left));
		assert_eq!(map_key(KeyCode::Numpad6), Some(Button::Right));
		assert_eq!(map_key(KeyCode::Numpad8), Some(Button::Up));
	}

	#[test]
	fn unmapped_keys_are_none() {
		assert_eq!(map_key(KeyCode::KeyA), None);
		assert_eq!(map_key(KeyCode::NumLock), None);
		assert_eq!(map_key(KeyCode::F1), None);
	}

	#[test]
	fn pad_face_buttons() {
		assert_eq!(map_pad_index(0), Some(Button::Ok));
		assert_eq!(map_pad_index(1), Some(Button::Cancel));
		assert_eq!(map_pad_index(3), Some(Button::Menu));
	}

	#[test]
	fn pad_dpad_slots() {
		assert_eq!(map_pad_index(12), Some(Button::Up));
		assert_eq!(map_pad_index(15), Some(Button::Right));
	}

	#[test]
	fn pad_unmapped_indices_are_none() {
		assert_eq!(map_pad_index(6), None);
		assert_eq!(map_pad_index(11), None);
		assert_eq!(map_pad_index(16), None);
	}
}
