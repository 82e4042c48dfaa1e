// main.rs
//
// Builds one of the example scenes, retires the panels that touching pieces
// share, and writes the solid as STL or OBJ.

mod scenes;

use anyhow::{Context, Result};
use blocksmith::Mesh;
use blocksmith::io::Format;
use clap::{Parser, ValueEnum};
use scenes::Scene;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// ASCII STL
    Stl,
    /// Binary STL
    StlBinary,
    /// Wavefront OBJ, indexed by point registration order
    Obj,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Stl => Format::StlAscii,
            OutputFormat::StlBinary => Format::StlBinary,
            OutputFormat::Obj => Format::Obj,
        }
    }
}

/// Generates solid meshes from code.
#[derive(Parser, Debug)]
#[command(name = "blocksmith")]
#[command(about = "Builds an example solid and writes it as STL or OBJ")]
struct Args {
    /// File to write the mesh to.
    output: PathBuf,

    /// Scene to build.
    #[arg(short, long, value_enum, default_value_t = Scene::GapCup)]
    scene: Scene,

    /// Output format (default: inferred from the output extension).
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Solid name written to the file (default: the scene name).
    #[arg(short, long)]
    name: Option<String>,

    /// Keep panels shared by touching pieces instead of retiring them.
    #[arg(long)]
    keep_duplicates: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let format = match args.format {
        Some(format) => format.into(),
        None => Format::from_path(&args.output)
            .context("Cannot infer the format, pass --format")?,
    };

    let name = args.name.unwrap_or_else(|| args.scene.name().to_string());
    let mut mesh = Mesh::new(name);
    args.scene
        .build(&mut mesh)
        .with_context(|| format!("Failed to build scene {}", args.scene.name()))?;

    println!(
        "Built {} faces ({} walls) from {} points",
        mesh.faces().len(),
        mesh.walls().len(),
        mesh.points().len()
    );

    if !args.keep_duplicates {
        let report = mesh.deduplicate();
        println!(
            "Retired {} walls and {} faces",
            report.walls_retired, report.faces_retired
        );
    }

    mesh.write(&args.output, format)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    println!(
        "Wrote {} faces to {}",
        mesh.active_face_count(),
        args.output.display()
    );
    Ok(())
}
