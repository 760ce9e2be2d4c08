use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use fixwire_core::{ByteOrder, CodecBuilder, WireType, inspect};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Layout {
    byte_order: ByteOrder,
    types: Vec<WireType>,
    #[serde(default)]
    bool_support: bool,
}

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        if !path.join("input.bin").exists() || !path.join("layout.json").exists() {
            continue;
        }
        regenerate_one(&path)?;
    }

    Ok(())
}

fn regenerate_one(dir: &Path) -> Result<(), String> {
    let layout_path = dir.join("layout.json");
    let layout_json = fs::read_to_string(&layout_path)
        .map_err(|err| format!("failed to read {}: {}", layout_path.display(), err))?;
    let layout: Layout = serde_json::from_str(&layout_json)
        .map_err(|err| format!("invalid layout {}: {}", layout_path.display(), err))?;

    let input_path = dir.join("input.bin");
    let input = File::open(&input_path)
        .map_err(|err| format!("failed to open {}: {}", input_path.display(), err))?;

    let mut builder = CodecBuilder::new(layout.byte_order).input(BufReader::new(input));
    if layout.bool_support {
        builder = builder.with_bool_support();
    }
    let mut codec = builder.build();
    let report = inspect(&mut codec, &layout.types);

    let output = dir.join("expected_report.json");
    let json = serde_json::to_string(&report)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    fs::write(&output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
