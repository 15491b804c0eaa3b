//! Launcher state shared between the windowing, input and rendering sides.

use crate::error::{LaunchError, SystemError};
use crate::launcher::{ApplicationLauncher, DetachedProcessLauncher, ProcessHandle};
use serde::Serialize;
use std::path::PathBuf;
use tapgrid_core::types::{PointInt, RectInt, SizeInt};
use tapgrid_core::TapgridConfig;
use tapgrid_domain::catalog::build_catalog_from_config;
use tapgrid_domain::{
    handle_tap, Catalog, DomainError, IconResolver, LaunchRequest, LayoutEngine, LayoutGeometry,
};
use tracing::{debug, error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PointerEventKind {
    Press,
    Motion,
    Release,
}

/// A pointer or touch event in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: PointInt,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: i32, y: i32) -> Self {
        Self { kind, position: PointInt::new(x, y) }
    }

    pub fn release(x: i32, y: i32) -> Self {
        Self::new(PointerEventKind::Release, x, y)
    }
}

/// One tile as the renderer should draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileView {
    pub index: usize,
    pub name: String,
    /// `None` means no icon file was found; draw a placeholder.
    pub icon: Option<PathBuf>,
    pub icon_rect: RectInt,
    pub label_rect: RectInt,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub viewport: SizeInt,
    pub geometry: LayoutGeometry,
    /// Passed through from configuration without being opened.
    pub wallpaper: Option<PathBuf>,
    pub tiles: Vec<TileView>,
}

/// Owns the catalog, layout and launcher for one launcher surface.
///
/// The catalog never changes after construction, so the geometry only needs
/// recomputing when the viewport does.
pub struct LauncherContext<L = DetachedProcessLauncher> {
    catalog: Catalog,
    icons: IconResolver,
    engine: LayoutEngine,
    wallpaper: Option<PathBuf>,
    geometry: LayoutGeometry,
    launcher: L,
}

impl LauncherContext<DetachedProcessLauncher> {
    /// Scans the configured directories and prepares a context that spawns real processes.
    pub fn bootstrap(config: &TapgridConfig) -> Result<Self, SystemError> {
        let catalog = build_catalog_from_config(&config.catalog).map_err(DomainError::from)?;
        info!("Loaded {} applications", catalog.len());
        Self::new(config, catalog, DetachedProcessLauncher::new())
    }
}

impl<L: ApplicationLauncher> LauncherContext<L> {
    pub fn new(config: &TapgridConfig, catalog: Catalog, launcher: L) -> Result<Self, SystemError> {
        let engine = LayoutEngine::from_config(&config.layout).map_err(DomainError::from)?;
        let viewport = SizeInt::new(config.display.width, config.display.height);
        let geometry = engine.compute(viewport, catalog.len());
        Ok(Self {
            catalog,
            icons: IconResolver::from_config(&config.icons),
            engine,
            wallpaper: config.display.wallpaper.clone(),
            geometry,
            launcher,
        })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn icons(&self) -> &IconResolver {
        &self.icons
    }

    pub fn geometry(&self) -> &LayoutGeometry {
        &self.geometry
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Adopts a new surface size, recomputing the layout if it changed.
    pub fn resize(&mut self, width: u32, height: u32) -> &LayoutGeometry {
        let viewport = SizeInt::new(width, height);
        if viewport != self.geometry.viewport {
            debug!("Viewport changed to {}x{}", width, height);
            self.geometry = self.engine.compute(viewport, self.catalog.len());
        }
        &self.geometry
    }

    /// The entry under `position`, without launching it.
    pub fn resolve_tap(&self, position: PointInt) -> Option<LaunchRequest> {
        handle_tap(position.x, position.y, &self.catalog, &self.geometry)
    }

    /// Launches the tapped entry on release. Press and motion events are ignored.
    ///
    /// Returns `None` when nothing was launched. A failed launch is logged and
    /// returned; the context stays usable.
    pub fn handle_pointer_event(
        &mut self,
        event: PointerEvent,
    ) -> Option<Result<ProcessHandle, LaunchError>> {
        if event.kind != PointerEventKind::Release {
            return None;
        }
        let request = self.resolve_tap(event.position)?;
        info!("Launching '{}': {}", request.name, request.command);
        let result = self.launcher.launch(&request.command);
        if let Err(e) = &result {
            error!("Failed to launch '{}': {}", request.name, e);
        }
        Some(result)
    }

    /// Builds the renderer's view of the current state. Icons are resolved on every call.
    pub fn frame(&self) -> RenderFrame {
        let tiles = self
            .catalog
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| {
                Some(TileView {
                    index,
                    name: entry.name().to_string(),
                    icon: self.icons.resolve_icon(entry.icon_name()),
                    icon_rect: self.geometry.icon_rect(index)?,
                    label_rect: self.geometry.label_rect(index)?,
                })
            })
            .collect();

        RenderFrame {
            viewport: self.geometry.viewport,
            geometry: self.geometry,
            wallpaper: self.wallpaper.clone(),
            tiles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::path::Path;
    use tapgrid_domain::AppEntry;
    use tempfile::TempDir;

    /// Records commands instead of spawning them.
    #[derive(Default)]
    struct RecordingLauncher {
        launched: Vec<String>,
        fail: bool,
    }

    impl ApplicationLauncher for RecordingLauncher {
        fn launch(&mut self, command: &str) -> Result<ProcessHandle, LaunchError> {
            if self.fail {
                return Err(LaunchError::Spawn {
                    command: command.to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "missing"),
                });
            }
            self.launched.push(command.to_string());
            Ok(ProcessHandle { pid: 1000 + self.launched.len() as u32 })
        }
    }

    fn app(name: &str, icon: &str) -> AppEntry {
        AppEntry::new(
            name.to_string(),
            icon.to_string(),
            format!("{} --launch", name.to_lowercase()),
            Path::new("/test").join(format!("{}.desktop", name)),
        )
        .unwrap()
    }

    fn config(icon_root: &Path) -> TapgridConfig {
        let mut config = TapgridConfig::default();
        config.display.width = 800;
        config.display.height = 480;
        config.display.wallpaper = Some(PathBuf::from("/srv/wallpaper.png"));
        config.icons.search_roots = vec![icon_root.to_path_buf()];
        config
    }

    fn context(fail: bool) -> (TempDir, LauncherContext<RecordingLauncher>) {
        let icons = TempDir::new().unwrap();
        std::fs::write(icons.path().join("editor.png"), "png").unwrap();
        let catalog =
            Catalog::from_scanned(vec![app("Terminal", "terminal"), app("Editor", "editor")]);
        let launcher = RecordingLauncher { fail, ..RecordingLauncher::default() };
        let ctx = LauncherContext::new(&config(icons.path()), catalog, launcher).unwrap();
        (icons, ctx)
    }

    fn center_of(ctx: &LauncherContext<RecordingLauncher>, index: usize) -> (i32, i32) {
        let rect = ctx.geometry().icon_rect(index).unwrap();
        (rect.x() + rect.width() as i32 / 2, rect.y() + rect.height() as i32 / 2)
    }

    #[test]
    fn test_release_launches_once() {
        let (_icons, mut ctx) = context(false);
        let (x, y) = center_of(&ctx, 0);

        let handle = ctx.handle_pointer_event(PointerEvent::release(x, y)).unwrap().unwrap();
        assert_eq!(handle.pid, 1001);
        assert_eq!(ctx.launcher().launched, vec!["editor --launch".to_string()]);
    }

    #[test]
    fn test_press_and_motion_never_launch() {
        let (_icons, mut ctx) = context(false);
        let (x, y) = center_of(&ctx, 1);

        let press = PointerEvent::new(PointerEventKind::Press, x, y);
        let motion = PointerEvent::new(PointerEventKind::Motion, x, y);
        assert!(ctx.handle_pointer_event(press).is_none());
        assert!(ctx.handle_pointer_event(motion).is_none());
        assert!(ctx.launcher().launched.is_empty());
    }

    #[test]
    fn test_release_outside_tiles_does_nothing() {
        let (_icons, mut ctx) = context(false);
        assert!(ctx.handle_pointer_event(PointerEvent::release(1, 1)).is_none());
        assert!(ctx.launcher().launched.is_empty());
    }

    #[test]
    fn test_failed_launch_keeps_context_usable() {
        let (_icons, mut ctx) = context(true);
        let (x, y) = center_of(&ctx, 0);

        let result = ctx.handle_pointer_event(PointerEvent::release(x, y)).unwrap();
        assert!(matches!(result, Err(LaunchError::Spawn { .. })));
        assert!(ctx.resolve_tap(PointInt::new(x, y)).is_some());
    }

    #[test]
    fn test_resize_recomputes_geometry() {
        let (_icons, mut ctx) = context(false);
        let before = *ctx.geometry();
        assert_eq!(*ctx.resize(800, 480), before);

        let after = *ctx.resize(1280, 720);
        assert_eq!(after.viewport, SizeInt::new(1280, 720));
        assert_ne!(after.icon_size, before.icon_size);
        assert!(after.fits_viewport());
    }

    #[test]
    fn test_frame_lists_tiles_in_catalog_order() {
        let (icons, ctx) = context(false);
        let frame = ctx.frame();

        assert_eq!(frame.viewport, SizeInt::new(800, 480));
        assert_eq!(frame.wallpaper, Some(PathBuf::from("/srv/wallpaper.png")));
        assert_eq!(frame.tiles.len(), 2);
        assert_eq!(frame.tiles[0].name, "Editor");
        assert_eq!(frame.tiles[0].icon, Some(icons.path().join("editor.png")));
        assert_eq!(frame.tiles[1].name, "Terminal");
        assert_eq!(frame.tiles[1].icon, None);
        assert_eq!(frame.tiles[1].icon_rect, ctx.geometry().icon_rect(1).unwrap());
        let terminal = &frame.tiles[1];
        assert_eq!(
            terminal.label_rect.y(),
            terminal.icon_rect.y() + terminal.icon_rect.height() as i32
        );
    }

    #[test]
    fn test_frame_serializes_to_json() {
        let (_icons, ctx) = context(false);
        let json = serde_json::to_value(ctx.frame()).unwrap();
        assert_eq!(json["viewport"]["width"], 800);
        assert_eq!(json["tiles"][0]["name"], "Editor");
        assert!(json["tiles"][1]["icon"].is_null());
    }

    #[test]
    fn test_invalid_layout_config_is_rejected() {
        let mut config = TapgridConfig::default();
        config.layout.shrink_factor = 1.5;
        let result =
            LauncherContext::new(&config, Catalog::default(), RecordingLauncher::default());
        assert!(matches!(result, Err(SystemError::Domain(DomainError::Layout(_)))));
    }
}
