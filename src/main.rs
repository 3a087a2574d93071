//! Topologie-Karten-Editor (Kommandozeile).
//!
//! Lädt einen Kartendatensatz über den Editor-Controller, gibt eine
//! Zusammenfassung aus und speichert optional unter neuem Pfad.
//!
//! Aufruf: `topomap-editor <karte.json> [--options <optionen.toml>] [--save <ziel.json>]`

use anyhow::{bail, Context};
use std::path::PathBuf;
use topomap_editor::{AppController, AppIntent, AppState, EditorOptions, RenderScene};

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Topomap Editor v{} startet...", env!("CARGO_PKG_VERSION"));

    let args = CliArgs::parse(std::env::args().skip(1))?;
    CliRunner::run(args)
}

/// Kommandozeilen-Argumente
#[derive(Debug, Default)]
struct CliArgs {
    map_path: String,
    options_path: Option<PathBuf>,
    save_path: Option<String>,
}

impl CliArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> anyhow::Result<Self> {
        let mut parsed = CliArgs::default();
        let mut map_path = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--options" => {
                    let value = args.next().context("--options erwartet einen Pfad")?;
                    parsed.options_path = Some(PathBuf::from(value));
                }
                "--save" => {
                    parsed.save_path = Some(args.next().context("--save erwartet einen Pfad")?);
                }
                other if other.starts_with("--") => bail!("Unbekannte Option: {}", other),
                other => {
                    if map_path.replace(other.to_string()).is_some() {
                        bail!("Nur eine Kartendatei erlaubt");
                    }
                }
            }
        }
        parsed.map_path = map_path.context(
            "Aufruf: topomap-editor <karte.json> [--options <optionen.toml>] [--save <ziel.json>]",
        )?;
        Ok(parsed)
    }
}

struct CliRunner;

impl CliRunner {
    fn run(args: CliArgs) -> anyhow::Result<()> {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = args
            .options_path
            .clone()
            .unwrap_or_else(EditorOptions::config_path);
        let options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        controller
            .handle_intent(
                &mut state,
                AppIntent::MapFileSelected {
                    path: args.map_path.clone(),
                },
            )
            .with_context(|| format!("Karte '{}' konnte nicht geladen werden", args.map_path))?;

        let scene = controller.build_render_scene(&state);
        Self::print_summary(&state, &scene);

        if let Some(path) = args.save_path {
            controller
                .handle_intent(&mut state, AppIntent::SaveAsPathSelected { path: path.clone() })
                .with_context(|| format!("Speichern nach '{}' fehlgeschlagen", path))?;
            println!("Gespeichert: {}", path);
        }
        Ok(())
    }

    fn print_summary(state: &AppState, scene: &RenderScene) {
        let info = &state.document.map_info;
        println!("Karte:      {}", state.document.name);
        println!("Punkte:     {}", state.point_count());
        println!("Kanten:     {}", state.edge_count());
        println!("Bereiche:   {}", state.area_count());
        println!("Striche:    {}", state.strokes.committed().len());
        println!(
            "Gruppen:    {} Netzwerk, {} Pfad",
            state.topology.network_groups.len(),
            state.topology.path_groups.len()
        );
        println!("Verwaist:   {} Kanten", state.topology.dangling_edges().len());
        match &state.raster {
            Some(raster) => println!("Raster:     {} x {} px", raster.width, raster.height),
            None => println!("Raster:     leer"),
        }
        println!("Maßstab:    {}", info.scale_ratio_label());
        println!(
            "Sichtbar:   {} Punkte, {} Kanten",
            scene.points.len(),
            scene.edges.len()
        );
    }
}
