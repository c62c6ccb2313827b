use anyhow::{anyhow, Context};
use config::{Config, File};
use log::{info, LevelFilter};
use serde::{Deserialize, Serialize};
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;
use strum::{Display, EnumString};
use tilenav::{
    timed, ContinuousMapCoordinate, GridDirection, GridType, MapCoordinate,
    Navigation, Navigator, NavigatorMetadata, Rotation, ScreenConverter,
    ScreenPosition, ScreenRect, StaggeredDirection, TileSize,
    TopologyDirection, Viewport, VirtualMapCoordinate,
};
use validator::Validate;

/// CLI for answering navigation and projection queries about a tile map.
#[derive(Debug, StructOpt)]
#[structopt(name = "tilenav")]
struct Opt {
    /// Path to a config file that describes the map, and optionally the
    /// viewport it's seen through. Supported formats: JSON, TOML
    #[structopt(short, long)]
    config: PathBuf,

    /// How to print results
    #[structopt(short = "f", long, default_value = "pretty")]
    format: OutputFormat,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Walk some number of steps from a cell, and print where you end up.
    Navigate {
        /// Direction to move in, e.g. north, south_east. Defaults to not
        /// moving at all, which just applies the map's boundaries to the
        /// starting cell
        #[structopt(short, long, default_value = "none")]
        direction: String,

        /// X coordinate of the starting cell
        #[structopt(short, long, allow_hyphen_values = true)]
        x: i32,

        /// Y coordinate of the starting cell
        #[structopt(short, long, allow_hyphen_values = true)]
        y: i32,

        /// Number of steps to take. Negative values walk backwards
        #[structopt(short, long, default_value = "1", allow_hyphen_values = true)]
        steps: i32,
    },

    /// Find the cell under a point on the screen. Requires a viewport in the
    /// config file.
    Project {
        /// X coordinate of the screen position, in pixels
        #[structopt(short, long, allow_hyphen_values = true)]
        x: f64,

        /// Y coordinate of the screen position, in pixels
        #[structopt(short, long, allow_hyphen_values = true)]
        y: f64,
    },
}

/// Different ways to print output. Everything is JSON.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    /// One line per result
    Compact,
    /// Indented and multi-line
    Pretty,
}

/// Everything that can go in the config file
#[derive(Clone, Debug, Deserialize)]
struct CliConfig {
    navigator: NavigatorMetadata,
    #[serde(default)]
    viewport: Option<ViewportConfig>,
}

/// Serialized form of a [Viewport]
#[derive(Copy, Clone, Debug, Deserialize, Validate)]
struct ViewportConfig {
    #[serde(default)]
    focus: ContinuousMapCoordinate,
    #[validate]
    pixel_bounds: ScreenRect,
    #[validate]
    tile_size: TileSize,
    #[serde(default)]
    rotation: Rotation,
}

impl ViewportConfig {
    fn build(self) -> anyhow::Result<Viewport> {
        Viewport::new(
            self.focus,
            self.pixel_bounds,
            self.tile_size,
            self.rotation,
        )
        .context("invalid viewport config")
    }
}

/// Output of the `project` subcommand
#[derive(Debug, Serialize)]
struct Projection {
    screen_position: ScreenPosition,
    /// Straight out of the screen converter, before any boundaries
    virtual_coordinate: VirtualMapCoordinate,
    /// Fractional position with wrapping applied
    continuous_coordinate: ContinuousMapCoordinate,
    /// The cell under the screen position, after boundaries
    navigation: Navigation,
}

fn load_config(config_path: &Path) -> anyhow::Result<CliConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    let config: CliConfig =
        settings.try_into().context("error reading config")?;
    config.navigator.check().context("invalid navigator config")?;
    if let Some(viewport) = &config.viewport {
        viewport.validate().context("invalid viewport config")?;
    }
    Ok(config)
}

fn navigate<D>(
    metadata: &NavigatorMetadata,
    direction: &str,
    origin: MapCoordinate,
    steps: i32,
) -> anyhow::Result<Navigation>
where
    D: TopologyDirection + FromStr,
    D::Err: std::error::Error + Send + Sync + 'static,
{
    let direction: D = direction
        .parse()
        .with_context(|| format!("invalid direction {:?}", direction))?;
    let navigator = metadata.build::<D>()?;
    Ok(timed!(
        format!("Navigating {:?} x{} from {}", direction, steps, origin),
        navigator.navigate(direction, origin, steps)
    ))
}

fn project<D: TopologyDirection>(
    metadata: &NavigatorMetadata,
    viewport: &Viewport,
    screen_position: ScreenPosition,
) -> anyhow::Result<Projection> {
    let navigator = metadata.build::<D>()?;
    let converter = metadata.grid_type.screen_converter();
    let virtual_coordinate = timed!(
        format!("Projecting {}", screen_position),
        converter.screen_to_map(viewport, screen_position)
    );
    Ok(Projection {
        screen_position,
        virtual_coordinate,
        continuous_coordinate: metadata.wrap_continuous(virtual_coordinate),
        navigation: navigator.normalize(virtual_coordinate.normalize()),
    })
}

fn print_output(
    format: OutputFormat,
    value: &impl Serialize,
) -> anyhow::Result<()> {
    let output = match format {
        OutputFormat::Compact => serde_json::to_string(value),
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
    }
    .context("error serializing output")?;
    println!("{}", output);
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = load_config(&opt.config)?;
    let metadata = config.navigator;
    info!("Loaded {} map from {:?}", metadata.grid_type, &opt.config);

    match opt.command {
        Command::Navigate {
            direction,
            x,
            y,
            steps,
        } => {
            let origin = MapCoordinate::new(x, y);
            let navigation = match metadata.grid_type {
                GridType::Grid | GridType::IsoDiamond => {
                    navigate::<GridDirection>(&metadata, &direction, origin, steps)?
                }
                GridType::IsoStaggered => navigate::<StaggeredDirection>(
                    &metadata, &direction, origin, steps,
                )?,
            };
            print_output(opt.format, &navigation)
        }
        Command::Project { x, y } => {
            let viewport = config
                .viewport
                .ok_or_else(|| {
                    anyhow!("project requires a viewport in the config file")
                })?
                .build()?;
            let position = ScreenPosition::new(x, y);
            let projection = match metadata.grid_type {
                GridType::Grid | GridType::IsoDiamond => {
                    project::<GridDirection>(&metadata, &viewport, position)?
                }
                GridType::IsoStaggered => {
                    project::<StaggeredDirection>(&metadata, &viewport, position)?
                }
            };
            print_output(opt.format, &projection)
        }
    }
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
