//! # tapgrid system layer (`tapgrid-system`)
//!
//! Connects the domain logic to the operating system: [`launcher`] spawns
//! detached processes and [`context`] holds the state a launcher surface
//! needs between events.

pub mod context;
pub mod error;
pub mod launcher;

pub use context::{LauncherContext, PointerEvent, PointerEventKind, RenderFrame, TileView};
pub use error::{LaunchError, SystemError};
pub use launcher::{ApplicationLauncher, DetachedProcessLauncher, ProcessHandle};
