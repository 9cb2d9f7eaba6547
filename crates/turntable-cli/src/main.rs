// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Turntable CLI entrypoint.
//!
//! Developer-facing inspection of the camera math:
//!
//! ```text
//! turntable show --config camera.json
//! turntable project --config camera.json --point 1,0,-2
//! turntable view --look-at 0,0,0 --look-from 0,2,5
//! ```
//!
//! Matrices are printed with the fixed `Display` formats of `turntable-math`.
//! Set `RUST_LOG=debug` to see camera construction events.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use turntable_camera::{CameraCreateInfo, TurntableCamera, ViewInfo};
use turntable_math::{Mat4, Point3};

#[derive(Parser, Debug)]
#[command(author, version, about = "Inspect turntable camera matrices")]
struct Args {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the view, projection and view-projection matrices of a camera config
    Show {
        /// JSON camera configuration
        #[arg(long)]
        config: PathBuf,
    },
    /// Map a world-space point to normalized device coordinates
    Project {
        /// JSON camera configuration
        #[arg(long)]
        config: PathBuf,
        /// World-space point as `x,y,z`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        point: Point3,
    },
    /// Print the view matrix for an eye/target pair and where both points land
    View {
        /// Target point as `x,y,z`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        look_at: Point3,
        /// Eye point as `x,y,z`
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        look_from: Point3,
    },
}

fn parse_point(raw: &str) -> Result<Point3, String> {
    let coords = raw
        .split(',')
        .map(|c| c.trim().parse::<f32>().map_err(|e| format!("{c:?}: {e}")))
        .collect::<Result<Vec<_>, _>>()?;
    if coords.iter().any(|c| !c.is_finite()) {
        return Err(format!("coordinates must be finite, got {raw:?}"));
    }
    match coords.as_slice() {
        &[x, y, z] => Ok(Point3::new(x, y, z)),
        _ => Err(format!("expected 3 comma-separated numbers, got {}", coords.len())),
    }
}

fn load_camera(path: &Path) -> Result<TurntableCamera> {
    let info = CameraCreateInfo::load(path)
        .with_context(|| format!("failed to load camera config {}", path.display()))?;
    let camera = TurntableCamera::try_new(&info)
        .with_context(|| format!("invalid camera config {}", path.display()))?;
    info!(config = %path.display(), "camera loaded");
    Ok(camera)
}

/// `RUST_LOG` directives when present and parseable, `info` otherwise.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn run(cmd: Command, out: &mut impl Write) -> Result<()> {
    match cmd {
        Command::Show { config } => {
            let camera = load_camera(&config)?;
            writeln!(out, "view\n{}", Mat4::from(*camera.view_matrix()))?;
            writeln!(out, "projection\n{}", Mat4::from(*camera.projection_matrix()))?;
            writeln!(
                out,
                "view-projection\n{}",
                Mat4::from(*camera.view_projection_matrix())
            )?;
        }
        Command::Project { config, point } => {
            let camera = load_camera(&config)?;
            writeln!(out, "{point} -> {}", camera.world_to_ndc(&point))?;
        }
        Command::View { look_at, look_from } => {
            if look_at.distance(&look_from) <= turntable_math::EPSILON {
                anyhow::bail!("look_at and look_from must differ");
            }
            let view = ViewInfo::new(look_at, look_from);
            let m = view.view_matrix();
            writeln!(out, "rotation: {}", view.current_rotation())?;
            writeln!(out, "{m}")?;
            writeln!(out, "look_at   {look_at} -> {}", m.transform_point(&look_at))?;
            writeln!(out, "look_from {look_from} -> {}", m.transform_point(&look_from))?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    run(args.cmd, &mut std::io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::{Arc, Mutex};

    use turntable_camera::CameraCreateInfo;

    use super::*;

    fn sample_info() -> CameraCreateInfo {
        CameraCreateInfo {
            look_at: Point3::ORIGIN,
            look_from: Point3::new(0.0, 2.0, 5.0),
            vertical_fov_degrees: 60.0,
            aspect_ratio: 1.5,
            z_near: 0.1,
            z_far: -1.0,
        }
    }

    fn run_to_string(cmd: Command) -> Result<String> {
        let mut out = Vec::new();
        run(cmd, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn camera_logs(rust_log: Option<&str>) -> String {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(log_filter(rust_log))
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            let _camera = TurntableCamera::new(&sample_info());
        });
        let bytes = buf.0.lock().expect("log buffer").clone();
        String::from_utf8(bytes).expect("utf-8 logs")
    }

    #[test]
    fn rust_log_debug_enables_camera_events() {
        let logs = camera_logs(Some("debug"));
        assert!(logs.contains("turntable camera built"), "{logs}");
    }

    #[test]
    fn default_filter_hides_camera_debug_events() {
        assert!(!camera_logs(None).contains("turntable camera built"));
        assert!(!camera_logs(Some("not a [valid filter")).contains("turntable camera built"));
    }

    #[test]
    fn parse_point_rejects_non_finite_values() {
        assert!(parse_point("nan,0,0").is_err());
        assert!(parse_point("0,inf,0").is_err());
        assert!(parse_point("0,0,-inf").is_err());
    }

    #[test]
    fn load_camera_reads_a_saved_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("camera.json");
        sample_info().save(&path).expect("save config");
        let camera = load_camera(&path).expect("valid config loads");
        assert_eq!(camera, TurntableCamera::new(&sample_info()));
    }

    #[test]
    fn load_camera_names_the_missing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent.json");
        let err = load_camera(&path).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.starts_with("failed to load camera config"), "{msg}");
        assert!(msg.contains("absent.json"), "{msg}");
    }

    #[test]
    fn load_camera_rejects_invalid_config() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("coincident.json");
        CameraCreateInfo {
            look_from: Point3::ORIGIN,
            ..sample_info()
        }
        .save(&path)
        .expect("save config");
        let msg = format!("{:#}", load_camera(&path).unwrap_err());
        assert!(msg.starts_with("invalid camera config"), "{msg}");
        assert!(msg.contains("coincide"), "{msg}");
    }

    #[test]
    fn show_prints_all_three_matrices() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = dir.path().join("camera.json");
        sample_info().save(&config).expect("save config");
        let out = run_to_string(Command::Show { config }).expect("show succeeds");
        assert!(out.starts_with("view\nMatrix 4x4:\n"), "{out}");
        assert!(out.contains("\nprojection\nMatrix 4x4:\n"), "{out}");
        assert!(out.contains("\nview-projection\nMatrix 4x4:\n"), "{out}");
    }

    #[test]
    fn project_maps_the_pivot_to_the_screen_center() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = dir.path().join("camera.json");
        sample_info().save(&config).expect("save config");
        let out = run_to_string(Command::Project {
            config,
            point: Point3::ORIGIN,
        })
        .expect("project succeeds");
        assert!(
            out.starts_with("Point3: ( 0.000000, 0.000000, 0.000000 ) -> Point3: ("),
            "{out}"
        );
    }

    #[test]
    fn view_rejects_coincident_points() {
        let p = Point3::new(1.0, 2.0, 3.0);
        let err = run_to_string(Command::View {
            look_at: p,
            look_from: p,
        })
        .unwrap_err();
        assert!(err.to_string().contains("must differ"), "{err}");
    }

    #[test]
    fn parse_point_accepts_negative_and_spaced_values() {
        let p = parse_point("-1.5, 2,3e1").expect("valid point");
        assert_eq!(p, Point3::new(-1.5, 2.0, 30.0));
    }

    #[test]
    fn parse_point_rejects_wrong_arity() {
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,2,3,4").is_err());
        assert!(parse_point("a,b,c").is_err());
    }

    #[test]
    fn args_parse_view_subcommand() {
        let args = Args::try_parse_from([
            "turntable",
            "view",
            "--look-at",
            "0,0,0",
            "--look-from",
            "-1,2,5",
        ])
        .expect("valid args");
        match args.cmd {
            Command::View { look_at, look_from } => {
                assert_eq!(look_at, Point3::ORIGIN);
                assert_eq!(look_from, Point3::new(-1.0, 2.0, 5.0));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
