//! PRC: Plane Rectangular Coordinates, from the command line
//!
//! ```sh
//! $ echo 11543.6883 22916.2436 | prc convert -z 9
//! > 36.103785789 140.087885491
//! $ echo 11543.6883 22916.2436 | prc convert -z 9 --dms --scale
//! > 36°06'13.628"    140°05'16.387"    0.99990647 ok
//! $ prc zone --mesh mesh_zone.csv 35.7 139.7
//! > 9
//! ```
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use jprcs::prelude::*;
use log::{debug, trace, warn};
use std::io::BufRead;
use std::path::PathBuf;

/// Convert coordinates of the Japan Plane Rectangular Coordinate System
/// (Bessel ellipsoid) to geodetic latitude and longitude
#[derive(Parser, Debug)]
#[command(name = "prc")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Read "x y" pairs (northing, easting in meters) and print latitude and longitude
    Convert {
        /// Zone number, 1..=19
        #[arg(short, long)]
        zone: u8,

        /// Print degrees, minutes and seconds rather than decimal degrees
        #[arg(short, long)]
        dms: bool,

        /// Also print the point scale factor, and whether it is within tolerance
        #[arg(short, long)]
        scale: bool,

        /// Number of decimals for decimal degree output
        #[arg(long, default_value = "9")]
        decimals: usize,

        /// Files to process, stdin if not present
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Find the zone of a position, or of a mesh code
    Zone {
        /// Mesh parameter file (meshCode,name,zone per line)
        #[arg(short, long)]
        mesh: Option<PathBuf>,

        /// Character encoding of the mesh parameter file
        #[arg(short, long, default_value = "Shift_JIS")]
        encoding: String,

        /// Look up this mesh code, rather than a position
        #[arg(short, long, conflicts_with_all = ["latitude", "longitude"])]
        code: Option<u32>,

        /// Latitude in degrees
        #[arg(requires = "longitude", allow_hyphen_values = true)]
        latitude: Option<f64>,

        /// Longitude in degrees
        #[arg(allow_hyphen_values = true)]
        longitude: Option<f64>,
    },

    /// List the zone origins
    Zones,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();
    trace!("This is PRC: {cli:#?}");

    match cli.command {
        Command::Convert {
            zone,
            dms,
            scale,
            decimals,
            files,
        } => convert(zone, dms, scale, decimals, &files),
        Command::Zone {
            mesh,
            encoding,
            code,
            latitude,
            longitude,
        } => resolve(mesh, &encoding, code, latitude.zip(longitude)),
        Command::Zones => {
            for zone in ZoneTable::new().iter() {
                let lat = Dms::from_degrees(zone.origin_latitude());
                let lon = Dms::from_degrees(zone.origin_longitude());
                println!("{:>2}  {lat}  {lon}", zone.id());
            }
            Ok(())
        }
    }
}

fn convert(zone: u8, dms: bool, scale: bool, decimals: usize, files: &[PathBuf]) -> Result<()> {
    let mut prc = PlaneRectangular::new(zone)?;
    let mut lines = 0_usize;

    let mut process = |line: &str| -> Result<()> {
        lines += 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }
        let Some((x, y)) = parse_pair(line) else {
            warn!("Line {lines}: cannot read '{line}' as 'x y'");
            return Ok(());
        };
        prc.set_xy(x, y);

        let mut output = if dms {
            format!("{:<17} {:<17}", prc.latitude_dms(), prc.longitude_dms())
        } else {
            format!(
                "{:.decimals$} {:.decimals$}",
                prc.latitude(),
                prc.longitude()
            )
        };
        if scale {
            let m = prc.scale_factor();
            let verdict = if m.is_acceptable() { "ok" } else { "outside" };
            output.push_str(&format!(" {:.8} {verdict}", m.value()));
        }
        println!("{output}");
        Ok(())
    };

    if files.is_empty() {
        for line in std::io::stdin().lock().lines() {
            process(&line?)?;
        }
        return Ok(());
    }

    for path in files {
        debug!("Reading {}", path.display());
        let file = std::fs::File::open(path)
            .with_context(|| format!("cannot open {}", path.display()))?;
        for line in std::io::BufReader::new(file).lines() {
            process(&line?)?;
        }
    }
    Ok(())
}

fn parse_pair(line: &str) -> Option<(f64, f64)> {
    let mut items = line.split_whitespace().map(str::parse::<f64>);
    let x = items.next()?.ok()?;
    let y = items.next()?.ok()?;
    Some((x, y))
}

fn resolve(
    mesh: Option<PathBuf>,
    encoding: &str,
    code: Option<u32>,
    position: Option<(f64, f64)>,
) -> Result<()> {
    let mut zones = match mesh {
        Some(path) => MeshZones::new(path),
        None => MeshZones::default(),
    }
    .with_encoding(encoding)?;

    let n = zones
        .try_load()
        .with_context(|| format!("cannot read {}", zones.path().display()))?;
    debug!("{n} mesh entries from {}", zones.path().display());

    let zone = match (code, position) {
        (Some(code), _) => zones.resolve_by_mesh_code(code).unwrap_or(0),
        (None, Some((latitude, longitude))) => zones.resolve_by_position(latitude, longitude),
        (None, None) => bail!("give either a mesh code or a latitude and longitude"),
    };
    println!("{zone}");
    Ok(())
}
