//! CLI command implementations.

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use braille_alphabet::{Alphabet, Letter};
use braille_layout::{layout_text, Page, PrintPlateProperties, TypesettingOptions};
use braille_mesh::{build_page, KnobOptions, PrintOptions};
use braille_stl::OutputFormat;
use rayon::prelude::*;

/// Lays out the input text and writes one STL file per page.
pub fn text(
    input_text: &str,
    output_dir: &str,
    name_prefix: &str,
    ascii: bool,
    base_plate: bool,
    alphabet_path: Option<&str>,
) -> Result<(), Box<dyn Error>> {
    let alphabet = match alphabet_path {
        Some(path) => Alphabet::load(path)?,
        None => Alphabet::german(),
    };

    let typesetting = TypesettingOptions::default();
    let plate = PrintPlateProperties::ender3_v2(&typesetting);
    let format = if ascii {
        OutputFormat::Ascii
    } else {
        OutputFormat::Binary
    };
    let print = PrintOptions::new(base_plate);
    let knobs = KnobOptions::default();

    let pages = layout_text(&alphabet, input_text, &plate);
    log::info!("typeset {} page(s)", pages.len());

    // Pages are independent; render and write them in parallel. A
    // failed page leaves the others' files intact.
    let failures: Vec<String> = pages
        .par_iter()
        .filter_map(|page| {
            write_page(page, output_dir, name_prefix, format, &typesetting, &print, &knobs)
                .err()
                .map(|e| format!("page {}: {e}", page.number))
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures.join("; ").into())
    }
}

fn write_page(
    page: &Page,
    output_dir: &str,
    name_prefix: &str,
    format: OutputFormat,
    typesetting: &TypesettingOptions,
    print: &PrintOptions,
    knobs: &KnobOptions,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let model_name = format!("Page{}", page.number);
    let filename = if name_prefix.is_empty() {
        format!("{model_name}.stl")
    } else {
        format!("{name_prefix}_{model_name}.stl")
    };
    let path = Path::new(output_dir).join(filename);

    let mesh = build_page(page, typesetting, print, knobs)?;

    let file = File::create(&path)?;
    let mut sink = BufWriter::new(file);
    format.writer().write(&model_name, &mut sink, &mesh)?;
    sink.flush()?;

    log::info!("wrote {} ({} triangles)", path.display(), mesh.len());
    Ok(())
}

/// Writes a single-cell plate for the given dot string.
pub fn cell(dots: &str, output: &str) -> Result<(), Box<dyn Error>> {
    let page = Page {
        number: 1,
        lines: vec![vec![Letter::from_dots(dots, false, "")]],
    };
    let mesh = build_page(
        &page,
        &TypesettingOptions::default(),
        &PrintOptions::new(true),
        &KnobOptions::default(),
    )?;

    let file = File::create(output)?;
    let mut sink = BufWriter::new(file);
    OutputFormat::Ascii
        .writer()
        .write("BrailleCell", &mut sink, &mesh)?;
    sink.flush()?;

    log::info!("wrote {output} ({} triangles)", mesh.len());
    Ok(())
}

/// Exports the embedded German alphabet as a JSON definition file.
pub fn alphabet(output: &str) -> Result<(), Box<dyn Error>> {
    Alphabet::german().save(output)?;
    log::info!("wrote {output}");
    Ok(())
}
