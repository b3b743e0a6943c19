/// A named input decoupled from whichever physical key or pad button
/// produced it. The set is fixed; raw codes without an entry in the
/// mapping tables never reach one of these.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Button {
	Tab,
	Ok,
	Shift,
	Control,
	Escape,
	PageUp,
	PageDown,
	Left,
	Up,
	Right,
	Down,
	Debug,
	Cancel,
	Menu,
}

impl Button {
	pub const COUNT: usize = 14;

	pub const ALL: [Button; Button::COUNT] = [
		Button::Tab,
		Button::Ok,
		Button::Shift,
		Button::Control,
		Button::Escape,
		Button::PageUp,
		Button::PageDown,
		Button::Left,
		Button::Up,
		Button::Right,
		Button::Down,
		Button::Debug,
		Button::Cancel,
		Button::Menu,
	];

	pub fn index(self) -> usize {
		self as usize
	}

	pub fn name(self) -> &'static str {
		match self {
			Button::Tab => "tab",
			Button::Ok => "ok",
			Button::Shift => "shift",
			Button::Control => "control",
			Button::Escape => "escape",
			Button::PageUp => "pageup",
			Button::PageDown => "pagedown",
			Button::Left => "left",
			Button::Up => "up",
			Button::Right => "right",
			Button::Down => "down",
			Button::Debug => "debug",
			Button::Cancel => "cancel",
			Button::Menu => "menu",
		}
	}
}


/// One generation of held state, one slot per logical button.
/// The tracker keeps two of these so edges fall out of a straight compare.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ButtonSet {
	held: [bool; Button::COUNT],
}

impl ButtonSet {
	pub fn get(&self, button: Button) -> bool {
		self.held[button.index()]
	}

	pub fn set(&mut self, button: Button, held: bool) {
		self.held[button.index()] = held;
	}

	pub fn clear(&mut self) {
		self.held = [false; Button::COUNT];
	}

	pub fn any_held(&self) -> bool {
		self.held.iter().any(|&held| held)
	}
}
