use shotsmith::cli::Args;
use shotsmith::config::FolderConfig;
use shotsmith::paths;
use shotsmith::tabs::add_existing::AddExistingTab;
use shotsmith::tabs::folder_names;
use shotsmith::tabs::structure::StructureTab;

use clap::Parser;
use eframe::egui;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
enum Tab {
    Structure,
    FolderNames,
    AddExisting,
}

/// Main application state
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
struct SmithApp {
    active_tab: Tab,
    folder_config: FolderConfig,
    structure: StructureTab,
    add_existing: AddExistingTab,
    dark_mode: bool,
}

impl Default for SmithApp {
    fn default() -> Self {
        Self {
            active_tab: Tab::Structure,
            folder_config: FolderConfig::default(),
            structure: StructureTab::default(),
            add_existing: AddExistingTab::default(),
            dark_mode: true,
        }
    }
}

impl eframe::App for SmithApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        egui::TopBottomPanel::top("tab_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.active_tab, Tab::Structure, "Structure");
                ui.selectable_value(&mut self.active_tab, Tab::FolderNames, "Folder Names");
                ui.selectable_value(
                    &mut self.active_tab,
                    Tab::AddExisting,
                    "Add to Existing Project",
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.dark_mode { "☀" } else { "🌙" };
                    if ui.button(icon).clicked() {
                        self.dark_mode = !self.dark_mode;
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.active_tab {
            Tab::Structure => self.structure.ui(ui, &self.folder_config),
            Tab::FolderNames => folder_names::ui(ui, &mut self.folder_config),
            Tab::AddExisting => self.add_existing.ui(ui),
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            storage.set_string(eframe::APP_KEY, json);
            debug!("App state saved");
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let path_config = paths::PathConfig::from_env_and_cli(args.config_dir.clone());
    if let Err(e) = paths::ensure_dirs(&path_config) {
        eprintln!("Warning: Failed to create application directories: {}", e);
    }

    // 0 (default) = warn, 1 (-v) = info, 2 (-vv) = debug, 3+ (-vvv) = trace
    let log_level = match args.verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    if let Some(log_path_opt) = &args.log_file {
        let log_path = log_path_opt
            .as_ref()
            .cloned()
            .unwrap_or_else(|| paths::data_file("shotsmith.log", &path_config));

        let file = std::fs::File::create(&log_path)
            .map_err(|e| format!("Failed to create log file {}: {e}", log_path.display()))?;

        env_logger::Builder::new()
            .filter_level(log_level)
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        info!(
            "Logging to file: {} (level: {:?})",
            log_path.display(),
            log_level
        );
    } else {
        let default_level = match args.verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
            .filter_module("egui", log::LevelFilter::Info) // Suppress egui DEBUG spam
            .format_timestamp_millis()
            .init();
    }

    info!("Shotsmith starting...");
    debug!("Command-line args: {:?}", args);
    info!(
        "Config path: {}",
        paths::config_file("shotsmith.json", &path_config).display()
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("Shotsmith v{}", env!("CARGO_PKG_VERSION")))
            .with_inner_size([1100.0, 720.0])
            .with_resizable(true),
        persist_window: true,
        #[cfg(not(target_arch = "wasm32"))]
        persistence_path: Some(paths::config_file("shotsmith.json", &path_config)),
        ..Default::default()
    };

    eframe::run_native(
        "Shotsmith",
        native_options,
        Box::new(move |cc| {
            // Load persisted app state if available, otherwise create default
            let mut app: SmithApp = cc
                .storage
                .and_then(|storage| storage.get_string(eframe::APP_KEY))
                .and_then(|json| serde_json::from_str(&json).ok())
                .unwrap_or_else(|| {
                    info!("No persisted state found, creating default app");
                    SmithApp::default()
                });

            // CLI prefills win over persisted values
            if let Some(dest) = &args.destination {
                app.structure.destination = dest.display().to_string();
            }
            if let Some(show) = &args.show {
                app.structure.show_name = show.clone();
            }

            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
