#![forbid(unsafe_code)]

use crate::pak;
use inquire::{Confirm, Text};
use std::path::{Path, PathBuf};

fn check_input_file(p: &Path) -> pak::PakResult<()> {
    if !p.exists() {
        return Err(pak::PakError::Invalid(format!(
            "input \"{}\" does not exist",
            p.display()
        )));
    }
    if !p.is_file() {
        return Err(pak::PakError::Invalid(format!(
            "input \"{}\" is not a file",
            p.display()
        )));
    }
    Ok(())
}

fn ensure_pak_ext(p: &Path) -> PathBuf {
    if p.extension().and_then(|e| e.to_str()).unwrap_or("") == "pak" {
        return p.to_path_buf();
    }
    let mut s = p.to_string_lossy().to_string();
    if !s.ends_with('.') {
        s.push('.');
    }
    s.push_str("pak");
    PathBuf::from(s)
}

fn prompt_err(e: inquire::InquireError) -> pak::PakError {
    pak::PakError::Io(std::io::Error::new(std::io::ErrorKind::Other, e))
}

pub fn run() -> pak::PakResult<()> {
    println!("DuoPak Wizard\n");

    let image = Text::new("Image file")
        .with_default("./image.png")
        .prompt()
        .map(PathBuf::from)
        .map_err(prompt_err)?;
    check_input_file(&image)?;

    let model = Text::new("Model file")
        .with_default("./model.stl")
        .prompt()
        .map(PathBuf::from)
        .map_err(prompt_err)?;
    check_input_file(&model)?;

    let output_raw = Text::new("Output .pak file")
        .with_default("./bundle.pak")
        .prompt()
        .map_err(prompt_err)?;
    let output = ensure_pak_ext(Path::new(&output_raw));

    println!("\nPack summary:");
    println!("  image : {}", image.display());
    println!("  model : {}", model.display());
    println!("  output: {}", output.display());

    let proceed = Confirm::new("Proceed?")
        .with_default(true)
        .prompt()
        .map_err(prompt_err)?;
    if !proceed {
        return Ok(());
    }

    pak::pack(&image, &model, &output)
}
