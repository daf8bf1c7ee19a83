//! Scenario files and the scripted desktop that serves them.
//!
//! A scenario is a RON document listing displays in provider order and the
//! focused window:
//!
//! ```ron
//! (
//!     displays: [
//!         (id: 1, bounds: (x: 0, y: 0, w: 1920, h: 1080), usable: (x: 0, y: 25, w: 1920, h: 1055)),
//!         (id: 2, bounds: (x: 1920, y: 0, w: 1600, h: 900)),
//!     ],
//!     window: (id: (pid: 42, window_id: 7), frame: (x: 100, y: 100, w: 400, h: 300)),
//! )
//! ```

use std::{fs, path::Path};

use parking_lot::Mutex;
use ron::{Options, extensions::Extensions};
use serde::{Deserialize, de::DeserializeOwned};
use snap_winops::{
    Display, DisplayProvider, FocusedWindowProvider, ResolverConfig, TargetFrame, Window,
    WindowMover,
};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Displays and focused window for a diagnostic run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    /// Attached displays, in provider order.
    pub displays: Vec<Display>,
    /// Focused window, if any.
    #[serde(default)]
    pub window: Option<Window>,
}

fn ron_options() -> Options {
    Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
}

fn parse_str<T: DeserializeOwned>(path: &Path, text: &str) -> Result<T> {
    ron_options().from_str(text).map_err(|err| Error::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Load a scenario file.
pub fn load_scenario(path: &Path) -> Result<Scenario> {
    let text = fs::read_to_string(path)?;
    let scenario: Scenario = parse_str(path, &text)?;
    debug!(
        path = %path.display(),
        displays = scenario.displays.len(),
        window = scenario.window.is_some(),
        "Loaded scenario"
    );
    Ok(scenario)
}

/// Load resolver settings; missing fields keep their defaults.
pub fn load_settings(path: &Path) -> Result<ResolverConfig> {
    let text = fs::read_to_string(path)?;
    parse_str(path, &text)
}

/// Scripted desktop backed by a [`Scenario`].
///
/// Applied frames are written back to the scenario window so later steps
/// start from the result of earlier ones.
pub struct ScenarioDesktop {
    /// Live scenario state.
    state: Mutex<Scenario>,
}

impl ScenarioDesktop {
    /// Wrap a loaded scenario.
    pub fn new(scenario: Scenario) -> Self {
        Self {
            state: Mutex::new(scenario),
        }
    }

    /// Snapshot of the current scenario state.
    pub fn snapshot(&self) -> Scenario {
        self.state.lock().clone()
    }
}

impl FocusedWindowProvider for ScenarioDesktop {
    fn focused_window(&self) -> Option<Window> {
        self.state.lock().window
    }
}

impl DisplayProvider for ScenarioDesktop {
    fn displays(&self) -> Vec<Display> {
        self.state.lock().displays.clone()
    }
}

impl WindowMover for ScenarioDesktop {
    fn set_frame(&self, window: &Window, target: &TargetFrame) -> snap_winops::Result<()> {
        let mut state = self.state.lock();
        match state.window.as_mut() {
            Some(w) if w.id == window.id => {
                let global = target.global_rect();
                info!(window = %w.id, from = %w.frame, to = %global, "Scenario window moved");
                w.frame = global;
                Ok(())
            }
            _ => Err(snap_winops::Error::effector(
                window.id,
                "window is no longer focused in the scenario",
            )),
        }
    }
}
