use std::fs;
use std::path::Path;
use tapgrid_core::config::ConfigLoader;
use tapgrid_core::TapgridConfig;
use tapgrid_system::{LauncherContext, PointerEvent, PointerEventKind};
use tempfile::TempDir;

fn write_entry(dir: &Path, file: &str, name: &str, icon: &str, exec: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join(file),
        format!("[Desktop Entry]\nType=Application\nName={}\nIcon={}\nExec={}\n", name, icon, exec),
    )
    .unwrap();
}

fn config_for(root: &Path) -> TapgridConfig {
    let user = root.join("user.toml");
    fs::write(
        &user,
        format!(
            "[catalog]\ndirectories = [{:?}, {:?}]\n\n\
             [icons]\nsearch_roots = [{:?}]\n\n\
             [display]\nwidth = 800\nheight = 480\n",
            root.join("missing").display().to_string(),
            root.join("applications").display().to_string(),
            root.join("icons").display().to_string(),
        ),
    )
    .unwrap();
    ConfigLoader::load_from_paths(None, Some(user.as_path())).unwrap()
}

#[test]
fn bootstrap_builds_catalog_from_config() {
    let root = TempDir::new().unwrap();
    let apps = root.path().join("applications");
    write_entry(&apps, "term.desktop", "Terminal", "utilities-terminal", "xterm %U");
    write_entry(&apps, "calc.desktop", "calculator", "accessories-calculator", "gnome-calculator");
    fs::create_dir_all(root.path().join("icons")).unwrap();
    fs::write(root.path().join("icons/utilities-terminal.svg"), "svg").unwrap();

    let context = LauncherContext::bootstrap(&config_for(root.path())).unwrap();
    let names: Vec<&str> = context.catalog().iter().map(|e| e.name()).collect();
    assert_eq!(names, vec!["calculator", "Terminal"]);

    let frame = context.frame();
    assert_eq!(frame.tiles.len(), 2);
    assert_eq!(frame.tiles[0].icon, None);
    assert_eq!(frame.tiles[1].icon, Some(root.path().join("icons/utilities-terminal.svg")));

    let rect = frame.tiles[1].icon_rect;
    let request = context.resolve_tap(rect.origin).unwrap();
    assert_eq!(request.command, "xterm");
}

#[cfg(unix)]
#[test]
fn release_spawns_detached_process() {
    let root = TempDir::new().unwrap();
    let apps = root.path().join("applications");
    write_entry(&apps, "true.desktop", "True", "none", "true --ignored %U");

    let mut context = LauncherContext::bootstrap(&config_for(root.path())).unwrap();
    let rect = context.geometry().icon_rect(0).unwrap();

    let press = PointerEvent::new(PointerEventKind::Press, rect.x(), rect.y());
    assert!(context.handle_pointer_event(press).is_none());
    assert_eq!(context.launcher().tracked_children(), 0);

    let handle = context
        .handle_pointer_event(PointerEvent::release(rect.x(), rect.y()))
        .unwrap()
        .unwrap();
    assert!(handle.pid > 0);
    assert_eq!(context.launcher().tracked_children(), 1);
}

#[test]
fn missing_program_does_not_poison_context() {
    let root = TempDir::new().unwrap();
    write_entry(
        &root.path().join("applications"),
        "ghost.desktop",
        "Ghost",
        "ghost",
        "tapgrid-test-no-such-program",
    );

    let mut context = LauncherContext::bootstrap(&config_for(root.path())).unwrap();
    let rect = context.geometry().icon_rect(0).unwrap();

    let first = context.handle_pointer_event(PointerEvent::release(rect.x(), rect.y())).unwrap();
    assert!(first.is_err());
    let second = context.handle_pointer_event(PointerEvent::release(rect.x(), rect.y())).unwrap();
    assert!(second.is_err());
}
