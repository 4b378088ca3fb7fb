use std::path::{Path, PathBuf};

use drone_simulator::{
    points::{csv_loader::LoadReport, point_error::PointError},
    session::simulator_session::SimulatorSession,
    utils::clock::Clock,
};
use egui::{Align2, RichText, Ui, Window};
use rand::Rng;
use tracing::warn;
use walkers::MapMemory;

/// Botones de zoom del mapa.
pub fn zoom(ui: &Ui, map_memory: &mut MapMemory) {
    Window::new("Map")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    let _ = map_memory.zoom_in();
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    let _ = map_memory.zoom_out();
                }
            });
        });
}

/// Formulario para agregar un punto a mano.
/// Si alguno de los campos no es un numero, el boton no hace nada.
pub fn add_point_window(ui: &Ui, session: &mut SimulatorSession) {
    Window::new("Data Point")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::LEFT_TOP, [10., 10.])
        .show(ui.ctx(), |ui| {
            egui::Grid::new("data_point_grid").show(ui, |ui| {
                ui.label("Latitude:");
                ui.add(
                    egui::TextEdit::singleline(session.latitude_input_mut())
                        .hint_text("Add a data")
                        .desired_width(120.0),
                );
                ui.end_row();

                ui.label("Longitude:");
                ui.add(
                    egui::TextEdit::singleline(session.longitude_input_mut())
                        .hint_text("Add a data")
                        .desired_width(120.0),
                );
                ui.end_row();
            });

            if ui.button("Add Data Point").clicked() {
                let _ = session.add_point();
            }
        });
}

/// Extensiones que muestra el selector de archivos.
const POINTS_FILE_EXTENSIONS: &[&str] = &["csv", "txt"];

/// Abre el selector de archivos del sistema. Devuelve `None` si se cancela.
fn pick_points_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Load points")
        .add_filter("Points", POINTS_FILE_EXTENSIONS)
        .pick_file()
}

/// Carga el archivo elegido. Si el selector se cerro sin elegir nada, la sesion no cambia.
fn load_picked_file<C: Clock, R: Rng>(
    session: &mut SimulatorSession<C, R>,
    picked: Option<PathBuf>,
    file_path: &mut String,
) -> Option<Result<LoadReport, PointError>> {
    let path = picked?;
    *file_path = path.display().to_string();
    Some(session.load_points_from_file(&path))
}

/// Carga de puntos desde un CSV: con el selector de archivos, escribiendo el path o
/// soltando el archivo en la ventana.
pub fn load_file_window(ui: &Ui, session: &mut SimulatorSession, file_path: &mut String) {
    Window::new("Points File")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::LEFT_TOP, [10., 140.])
        .show(ui.ctx(), |ui| {
            if ui.button("Load File").clicked() {
                let _ = load_picked_file(session, pick_points_file(), file_path);
            }
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(file_path)
                        .hint_text("points.csv")
                        .desired_width(160.0),
                );
                if ui.button("Load Path").clicked() && !file_path.is_empty() {
                    let _ = session.load_points_from_file(Path::new(file_path.as_str()));
                }
            });
            ui.label(RichText::new("or drop a file on the map").small());

            if let Some(report) = session.get_last_report() {
                let color = if report.is_clean() {
                    egui::Color32::GRAY
                } else {
                    egui::Color32::YELLOW
                };
                ui.label(RichText::new(report.summary()).color(color));
            }
        });
}

/// Lee los archivos que se soltaron sobre la ventana en este frame.
pub fn handle_dropped_files(ctx: &egui::Context, session: &mut SimulatorSession) {
    let dropped = ctx.input(|i| i.raw.dropped_files.clone());

    for file in dropped {
        if let Some(path) = &file.path {
            let _ = session.load_points_from_file(path);
        } else if let Some(bytes) = &file.bytes {
            let text = String::from_utf8_lossy(bytes);
            session.load_points_from_text(&text);
        } else {
            warn!(name = %file.name, "dropped file has no contents");
        }
    }
}

/// Botones "Simulate" y "Pause"/"Resume".
pub fn simulation_window(ui: &Ui, session: &mut SimulatorSession) {
    Window::new("Simulation")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_TOP, [-10., 10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("Simulate").heading()).clicked() {
                    session.simulate();
                }

                let label = session.pause_label();
                if ui.button(RichText::new(label).heading()).clicked() {
                    let _ = session.pause_toggle();
                }
            });

            let drone = session.get_drone();
            if drone.get_state().is_active() {
                let position = drone.get_position();
                ui.label(format!(
                    "ticks: {}   ({:.04}, {:.04})",
                    drone.get_elapsed_ticks(),
                    position.lat,
                    position.long
                ));
            }
        });
}
