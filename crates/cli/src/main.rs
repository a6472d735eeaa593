use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use overlap::{resolve, Polygon, ShapeKind};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod input;
mod menu;
mod report;

use input::KindArg;
use report::Report;

#[derive(Parser)]
#[command(name = "overlap")]
#[command(about = "Classify how two convex polygons overlap", version)]
struct Cmd {
    /// Log classifier passes (debug level) to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Analyze two polygons given as flat coordinate lists "x1 y1 x2 y2 ..."
    Analyze {
        #[arg(long)]
        a: String,
        #[arg(long)]
        b: String,
        #[arg(long, value_enum, default_value_t = KindArg::Polygon)]
        kind: KindArg,
        /// Print a JSON report instead of text
        #[arg(long)]
        json: bool,
    },
    /// Analyze a pair described in a JSON file
    File {
        #[arg(long)]
        input: PathBuf,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Interactive rectangle menu on stdin/stdout
    Menu,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Analyze { a, b, kind, json } => analyze(&a, &b, kind.into(), json),
        Action::File { input, out } => file(&input, out.as_deref()),
        Action::Menu => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            menu::run(&mut stdin.lock(), &mut stdout.lock())
        }
    }
}

fn analyze(a: &str, b: &str, kind: ShapeKind, json: bool) -> Result<()> {
    let pa = input::polygon_from_text(kind.label(), a, kind).context("polygon a")?;
    let pb = input::polygon_from_text(kind.label(), b, kind).context("polygon b")?;
    tracing::info!(a_sides = pa.sides(), b_sides = pb.sides(), %kind, "analyze");
    emit(&pa, &pb, json, None)
}

fn file(path: &Path, out: Option<&Path>) -> Result<()> {
    tracing::info!(input = %path.display(), "file");
    let (a, b) = input::read_pair(path)?;
    emit(&a, &b, true, out)
}

fn emit(a: &Polygon, b: &Polygon, json: bool, out: Option<&Path>) -> Result<()> {
    let r = resolve(a, b);
    tracing::info!(relation = %r.relation, decided_by = %r.decided_by, "resolved");
    if !json {
        print!("{}", report::render(a, b, &r));
        return Ok(());
    }
    let report = Report::new(a, b, &r);
    match out {
        Some(out_path) => {
            if let Some(parent) = out_path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("creating {}", parent.display()))?;
                }
            }
            std::fs::write(out_path, serde_json::to_vec_pretty(&report)?)
                .with_context(|| format!("writing {}", out_path.display()))?;
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn cli_parses_subcommands() {
        let cmd = Cmd::try_parse_from([
            "overlap", "analyze", "--a", "0 0 1 0 1 1", "--b", "2 2 3 2 3 3", "--json",
        ])
        .unwrap();
        assert!(matches!(
            cmd.action,
            Action::Analyze { kind: KindArg::Polygon, json: true, .. }
        ));
        let cmd = Cmd::try_parse_from(["overlap", "-v", "menu"]).unwrap();
        assert!(cmd.verbose);
        assert!(Cmd::try_parse_from(["overlap", "analyze", "--a", "0 0"]).is_err());
    }

    #[test]
    fn file_writes_json_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("pair.json");
        std::fs::write(
            &input,
            r#"{ "a": { "vertices": [[0,0],[4,0],[4,4],[0,4]] },
                 "b": { "vertices": [[1,1],[2,1],[2,2],[1,2]] } }"#,
        )
        .unwrap();
        let out = dir.path().join("nested/report.json");
        file(&input, Some(&out)).unwrap();
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["relation"], "contains");
        assert_eq!(parsed["outer"], "A");
    }
}
