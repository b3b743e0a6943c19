//! Windowing shell: owns the event loop and window, forwards raw platform
//! events into the input layer, and drives the once-per-frame update tick.
//! No rendering lives here; an app gets a window and fresh input state,
//! what it draws with is its own business.

use std::path::Path;

use anyhow::Context as _;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use stagekit_input::InputConfig;

pub mod prelude {
	pub use stagekit_input as input;
	pub use winit;
}

pub use stagekit_input::System as InputSystem;


pub struct Settings<'title> {
	pub initial_title: &'title str,
	pub initial_size: [u32; 2],

	/// Logical render surface the viewport letterboxes into the window.
	pub surface_size: [i32; 2],
}

impl<'title> Settings<'title> {
	pub fn new(initial_title: &'title str) -> Settings<'title> {
		Settings {
			initial_title,
			initial_size: [1280, 720],
			surface_size: [816, 624],
		}
	}
}


/// Everything an app sees each frame.
pub struct Context {
	pub input: InputSystem,
	pub wants_quit: bool,
}

pub trait App {
	/// Called once per frame, after input has been promoted for the frame.
	fn frame(&mut self, ctx: &mut Context);
}


pub fn run<F, A>(settings: Settings<'_>, start_app: F) -> anyhow::Result<()>
	where A: App + 'static
		, F: FnOnce(&mut Context) -> anyhow::Result<A>
{
	init_logging();

	let config = load_config(Path::new("stagekit.toml"))?;

	let mut input = InputSystem::new(config);
	let [width, height] = settings.surface_size;
	input.viewport.set_surface_size(width, height);

	let mut context = Context { input, wants_quit: false };
	let app = start_app(&mut context)?;

	let event_loop = EventLoop::new()?;

	let mut shell = Shell {
		title: settings.initial_title.to_owned(),
		initial_size: settings.initial_size,
		window: None,
		context,
		app,
	};

	event_loop.run_app(&mut shell)?;
	Ok(())
}


fn init_logging() {
	use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

	let _ = TermLogger::init(
		LevelFilter::Info,
		Config::default(),
		TerminalMode::Mixed,
		ColorChoice::Auto,
	);

	log_panics::init();
}

#[tracing::instrument(name = "config load", skip_all)]
fn load_config(path: &Path) -> anyhow::Result<InputConfig> {
	if !path.exists() {
		return Ok(InputConfig::default());
	}

	let data = std::fs::read_to_string(path)
		.with_context(|| format!("Reading '{}'", path.display()))?;

	let config = toml::from_str(&data)
		.with_context(|| format!("Parsing '{}'", path.display()))?;

	log::info!("Loaded input config from '{}'", path.display());
	Ok(config)
}


struct Shell<A: App> {
	title: String,
	initial_size: [u32; 2],
	window: Option<Window>,
	context: Context,
	app: A,
}

impl<A: App> ApplicationHandler for Shell<A> {
	fn resumed(&mut self, event_loop: &ActiveEventLoop) {
		if self.window.is_some() {
			return;
		}

		let [width, height] = self.initial_size;
		let attributes = Window::default_attributes()
			.with_title(&self.title)
			.with_inner_size(PhysicalSize::new(width, height));

		match event_loop.create_window(attributes) {
			Ok(window) => {
				let size = window.inner_size();
				self.context.input.viewport.fit_window(size.width as f64, size.height as f64);
				self.window = Some(window);
			}

			Err(err) => {
				log::error!("Failed to create window: {err}");
				event_loop.exit();
			}
		}
	}

	fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
		match event {
			WindowEvent::CloseRequested => event_loop.exit(),

			WindowEvent::Resized(size) => {
				self.context.input.viewport.fit_window(size.width as f64, size.height as f64);
			}

			WindowEvent::RedrawRequested => {
				// The single promotion point: pending input becomes this
				// frame's published state, then the app runs against it.
				self.context.input.update();
				self.app.frame(&mut self.context);

				if self.context.wants_quit {
					event_loop.exit();
				}
			}

			event => self.context.input.on_window_event(&event),
		}
	}

	fn about_to_wait(&mut self, _: &ActiveEventLoop) {
		if let Some(window) = &self.window {
			window.request_redraw();
		}
	}
}
