use crate::buttons::{Button, ButtonSet};


/// Which screen axis wins when a diagonal has to collapse to 4-way movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScreenAxis {
	X,
	Y,
}

/// Composite 4-way and 8-way direction in numeric-keypad encoding.
///
/// 0 is neutral, otherwise 1-9 with 5 unused: 1 = down-left, 2 = down,
/// 7 = up-left, 9 = up-right. `dir8` reflects the raw combined axes;
/// `dir4` collapses true diagonals to the remembered preferred axis so
/// 4-directional movement doesn't oscillate frame to frame.
#[derive(Debug, Default, Copy, Clone)]
pub struct DirectionState {
	dir4: u8,
	dir8: u8,
	preferred: Option<ScreenAxis>,
}

impl DirectionState {
	pub fn dir4(&self) -> u8 {
		self.dir4
	}

	pub fn dir8(&self) -> u8 {
		self.dir8
	}

	pub fn clear(&mut self) {
		*self = DirectionState::default();
	}

	/// Recompute both encodings from the held arrow buttons.
	/// Called once at the end of every tracker update.
	pub fn update(&mut self, held: &ButtonSet) {
		let mut x = 0;
		let mut y = 0;

		if held.get(Button::Left) { x -= 1; }
		if held.get(Button::Right) { x += 1; }
		if held.get(Button::Up) { y -= 1; }
		if held.get(Button::Down) { y += 1; }

		self.dir8 = numpad_direction(x, y);

		if x != 0 && y != 0 {
			// Keep only the preferred axis; a diagonal never reassigns it,
			// so the collapsed direction is stable while the set is held.
			match self.preferred {
				Some(ScreenAxis::X) => y = 0,
				_ => x = 0,
			}
		} else if x != 0 {
			self.preferred = Some(ScreenAxis::Y);
		} else if y != 0 {
			self.preferred = Some(ScreenAxis::X);
		}

		self.dir4 = numpad_direction(x, y);
	}
}

fn numpad_direction(x: i32, y: i32) -> u8 {
	if x != 0 || y != 0 {
		(5 - 3 * y + x) as u8
	} else {
		0
	}
}
