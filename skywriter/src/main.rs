use std::path::{Path, PathBuf};

use skywriter::{export_mission, run_pipeline, BuiltinFont, ExportFormat, ExportMetadata, PipelineConfig};

fn main() {
    println!("Skywriting Mission Demo");

    // Optional first argument: a JSON config file
    let config = match std::env::args().nth(1) {
        Some(path) => match PipelineConfig::from_file(Path::new(&path)) {
            Ok(config) => config,
            Err(e) => {
                println!("Error loading config {}: {}", path, e);
                return;
            }
        },
        None => {
            let mut config = PipelineConfig::default();
            config.text.text = "HELLO SKY".to_string();
            config.home.latitude = 47.397742;
            config.home.longitude = 8.545594;
            config.home.altitude_msl = 488.0;
            config
        }
    };

    let output = match run_pipeline(&config, &BuiltinFont) {
        Ok(output) => output,
        Err(e) => {
            println!("Error building mission: {}", e);
            return;
        }
    };

    println!("Text: {:?} in {}", config.text.text, config.text.font);
    println!(
        "Strokes: {}, points: {} -> {} after simplification",
        output.simplified.len(),
        output.scene.point_count(),
        output.simplified.point_count()
    );
    println!(
        "Transitions: {} (total {:.1}m, max {:.1}m)",
        output.transitions.count, output.transitions.total, output.transitions.max
    );
    println!(
        "Mission items: {}, path {:.0}m, estimated flight time {}",
        output.mission.items().len(),
        output.flight_time.distance,
        output.flight_time.formatted()
    );

    let metadata = ExportMetadata::for_text(config.text.text.clone()).generated_now();
    for format in [ExportFormat::Plan, ExportFormat::Kml] {
        match export_mission(&output.mission, &PathBuf::from("skywriter-mission"), format, &metadata) {
            Ok(path) => println!("{} file written to {}", format, path.display()),
            Err(e) => println!("Error writing {} file: {}", format, e),
        }
    }
}
