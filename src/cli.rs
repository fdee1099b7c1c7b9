use crate::config::load_config;
use crate::measure::{LayoutSession, MeasureProvider, Measured};
use crate::parser::parse_scene;
use crate::render::{render_svg, write_output_svg};
use crate::scene_dump::{SceneDump, write_scene_dump};
use crate::viewport::ViewportSize;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::collections::HashMap;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "focusc", version, about = "Focus-center canvas layout engine")]
pub struct Args {
    /// Scene JSON export (content-store shape) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Viewport width
    #[arg(short = 'w', long = "width", default_value_t = 1440.0)]
    pub width: f32,

    /// Viewport height
    #[arg(short = 'H', long = "height", default_value_t = 900.0)]
    pub height: f32,

    /// JSON map of element id -> [width, height], applied as a
    /// measurement pass before resolving
    #[arg(short = 'm', long = "measured")]
    pub measured: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Svg,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let input = read_input(args.input.as_deref())?;
    let centers = parse_scene(&input)?;
    let viewport = ViewportSize::new(args.width, args.height);
    let mut session = LayoutSession::new(
        centers,
        viewport,
        config.theme.clone(),
        config.layout.clone(),
    );

    if let Some(path) = args.measured.as_deref() {
        let provider = FileMeasurements::load(path)?;
        session.commit_initial_paint();
        let token = session.measure_token();
        session.apply_measurements(&provider, token);
    }

    let scene = session.scene();
    match args.format {
        OutputFormat::Json => match args.output.as_deref() {
            Some(path) => write_scene_dump(path, &scene)?,
            None => {
                let dump = SceneDump::from_scene(&scene);
                println!("{}", serde_json::to_string_pretty(&dump)?);
            }
        },
        OutputFormat::Svg => {
            let svg = render_svg(&scene, &config.theme, &config.layout);
            write_output_svg(&svg, args.output.as_deref())?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path == Path::new("-") {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(buf);
        }
        return Ok(std::fs::read_to_string(path)?);
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Measurement provider backed by a sizes file, standing in for the
/// rendering layer when resolving from the command line.
struct FileMeasurements {
    sizes: HashMap<String, [f32; 2]>,
}

impl FileMeasurements {
    fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let sizes: HashMap<String, [f32; 2]> = serde_json::from_str(&contents)?;
        Ok(Self { sizes })
    }
}

impl MeasureProvider for FileMeasurements {
    fn measure(&self, element_id: &str) -> Option<Measured> {
        self.sizes.get(element_id).map(|[width, height]| Measured {
            width: *width,
            height: *height,
        })
    }
}
