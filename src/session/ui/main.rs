mod plugins;
mod windows;

use drone_simulator::{
    drones::drone_error::DroneError,
    session::{simulator_config::SimulatorConfig, simulator_session::SimulatorSession},
    utils::clock::SystemClock,
};
use eframe::{run_native, App, CreationContext, NativeOptions};
use egui::CentralPanel;
use plugins::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use walkers::{sources::OpenStreetMap, HttpTiles, Map, MapMemory, Tiles};

use windows::*;

struct SimulatorApp {
    tiles: Box<dyn Tiles>,
    map_memory: MapMemory,
    click_watcher: ClickWatcher,
    session: SimulatorSession,
    file_path: String,
    /// Ultima revision de la vista que se aplico al mapa.
    applied_view_revision: Option<u64>,
    anchor: MapAnchor,
}

impl SimulatorApp {
    /// Muestra el mapa con los puntos, el Drone y su recorrido, y las ventanas de control
    /// encima.
    fn handle_map(&mut self, ctx: &eframe::egui::Context) {
        handle_dropped_files(ctx, &mut self.session);
        self.session.update();

        let scene = self.session.scene();
        if self.applied_view_revision != Some(scene.view_revision) {
            if scene.center.is_finite() {
                self.map_memory.center_at(to_position(scene.center));
            }
            let _ = self.map_memory.set_zoom(f32::from(scene.zoom));
            self.applied_view_revision = Some(scene.view_revision);
        }

        self.click_watcher.select(&scene, self.map_memory.zoom());
        let selected = self.click_watcher.selected.clone();
        let my_position = self.anchor.follow(scene.center);

        CentralPanel::default().show(ctx, |ui| {
            let tiles_ref: &mut dyn Tiles = &mut *self.tiles;
            ui.add(
                Map::new(
                    Some(tiles_ref),
                    &mut self.map_memory,
                    my_position,
                )
                .with_plugin(&mut self.click_watcher)
                .with_plugin(PointMarkers {
                    scene: &scene,
                    selected: selected.as_ref(),
                })
                .with_plugin(DroneTrail { scene: &scene }),
            );

            zoom(ui, &mut self.map_memory);
            self.click_watcher.show_popup(ui);
            add_point_window(ui, &mut self.session);
            load_file_window(ui, &mut self.session, &mut self.file_path);
            simulation_window(ui, &mut self.session);
        });

        if let Some(wait) = self.session.time_until_next_tick() {
            ctx.request_repaint_after(wait);
        }
    }
}

impl App for SimulatorApp {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        self.handle_map(ctx);
    }
}

/// Inicializa la aplicacion con la sesion ya configurada.
fn create_app(cc: &CreationContext<'_>, session: SimulatorSession) -> Box<dyn App> {
    let tiles = Box::new(HttpTiles::new(OpenStreetMap, cc.egui_ctx.clone()));

    Box::new(SimulatorApp {
        tiles,
        map_memory: MapMemory::default(),
        click_watcher: ClickWatcher::default(),
        session,
        file_path: String::new(),
        applied_view_revision: None,
        anchor: MapAnchor::default(),
    })
}

/// El primer argumento, si esta, es el path a un JSON de configuracion.
fn load_config(args: &[String]) -> Result<SimulatorConfig, DroneError> {
    match args.get(1) {
        Some(path) => {
            info!(path = %path, "reading simulator config");
            SimulatorConfig::read_config(path)
        }
        None => Ok(SimulatorConfig::default()),
    }
}

// Entry point of the application, sets up window options and runs the main event loop
fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    let session = match load_config(&args)
        .and_then(|config| SimulatorSession::new(&config, SystemClock))
    {
        Ok(session) => session,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let app_name = "Drone Simulator";
    let win_options = NativeOptions {
        ..Default::default()
    };
    if let Err(e) = run_native(
        app_name,
        win_options,
        Box::new(move |cc| Ok(create_app(cc, session))),
    ) {
        eprintln!("Error: {}", e);
    }
}
