//! FILENAME: src/lib.rs
// PURPOSE: Main library entry point (Tauri bridge).
// CONTEXT: The webview reaches the filesystem only through the storage commands.

use tauri::{AppHandle, Manager, RunEvent, WebviewUrl, WebviewWindowBuilder};

pub mod logging;
pub mod storage;

pub use logging::{init_log_file, next_seq, write_log, write_log_raw};
pub use storage::{default_storage_root, read_text, resolve_path, write_text, StorageState};


/// Creates the main application window loading the bundled page.
fn create_main_window(app: &AppHandle) -> tauri::Result<()> {
    WebviewWindowBuilder::new(app, "main", WebviewUrl::App("index.html".into()))
        .title("Taskdesk")
        .inner_size(800.0, 600.0)
        .build()?;
    Ok(())
}

pub fn run() {
    let app = tauri::Builder::default()
        .setup(|app| {
            match logging::init_log_file(&app.path().app_log_dir()?) {
                Ok(path) => {
                    crate::log_info!("SYS", "Tauri backend starting, log={}", path.display());
                }
                Err(e) => {
                    eprintln!("[LOG_INIT] FAILED: {}", e);
                    eprintln!("[LOG_INIT] Continuing with console-only logging");
                }
            }

            // Storage root is resolved once here and stays immutable for the
            // lifetime of the process.
            let home = app.path().home_dir()?;
            let root = storage::default_storage_root(&home);
            crate::log_info!("SYS", "Using storage root {}", root.display());
            app.manage(StorageState::new(root));

            create_main_window(app.handle())?;
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            // File bridge commands
            storage::read_file,
            storage::write_file,
            // Logging commands
            logging::log_frontend,
            logging::log_frontend_atomic,
            logging::get_next_seq,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|app_handle, event| match event {
        // macOS: clicking the dock icon with no windows open recreates one.
        #[cfg(target_os = "macos")]
        RunEvent::Reopen {
            has_visible_windows,
            ..
        } => {
            if !has_visible_windows {
                if let Err(e) = create_main_window(app_handle) {
                    crate::log_error!("SYS", "Failed to recreate window: {}", e);
                }
            }
        }
        // macOS convention: the app keeps running after the last window closes.
        #[cfg(target_os = "macos")]
        RunEvent::ExitRequested { code: None, api, .. } => {
            api.prevent_exit();
        }
        _ => {}
    });
}
