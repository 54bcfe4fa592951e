use png::{BitDepth, ColorType, Encoder};
use std::env;
use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Edge length of the generated square texture in pixels.
const TEXTURE_SIZE: u32 = 256;
/// Pixels of aluminum frame around the cell area.
const FRAME_WIDTH: u32 = 8;
/// Photovoltaic cells per texture edge.
const CELLS_PER_EDGE: u32 = 6;
/// Pixels of gap between neighboring cells.
const CELL_GAP: u32 = 3;

/// Cell surface color (dark silicon blue).
const CELL_COLOR: [u8; 3] = [18, 38, 92];
/// Busbar / gap color between cells.
const GAP_COLOR: [u8; 3] = [210, 214, 220];
/// Frame color around the panel edge.
const FRAME_COLOR: [u8; 3] = [168, 172, 178];

/// Print CLI usage.
fn print_usage(program: &str) {
    eprintln!(
        "Usage: {program} [--output <path>]\n\
         Generates the solar-panel texture used by the visualizer.\n\
         Default output: assets/textures/panel.png"
    );
}

/// Parse simple CLI args for the output path.
fn parse_args() -> Result<PathBuf, String> {
    let mut output = PathBuf::from("assets/textures/panel.png");

    let mut it = env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--output" => {
                let value = it
                    .next()
                    .ok_or_else(|| "--output requires a value".to_string())?;
                output = PathBuf::from(value);
            }
            "--help" | "-h" => {
                let program = env::args()
                    .next()
                    .unwrap_or_else(|| "make_panel_texture".to_string());
                print_usage(&program);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {arg}")),
        }
    }

    Ok(output)
}

/// Paint the panel texture: framed grid of dark cells with light busbars.
fn panel_pixels(size: u32) -> Vec<u8> {
    let cell_span = (size - 2 * FRAME_WIDTH) / CELLS_PER_EDGE;
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    for y in 0..size {
        for x in 0..size {
            let color = pixel_color(x, y, size, cell_span);
            data.extend_from_slice(&[color[0], color[1], color[2], 255]);
        }
    }
    data
}

/// Classify one pixel as frame, cell gap, or cell surface.
fn pixel_color(x: u32, y: u32, size: u32, cell_span: u32) -> [u8; 3] {
    let in_frame = x < FRAME_WIDTH
        || y < FRAME_WIDTH
        || x >= size - FRAME_WIDTH
        || y >= size - FRAME_WIDTH;
    if in_frame {
        return FRAME_COLOR;
    }

    let cx = (x - FRAME_WIDTH) % cell_span;
    let cy = (y - FRAME_WIDTH) % cell_span;
    if cx < CELL_GAP || cy < CELL_GAP {
        GAP_COLOR
    } else {
        CELL_COLOR
    }
}

/// Ensure the output parent directory exists.
fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    fs::create_dir_all(parent)
        .map_err(|e| format!("Failed to create output directory {}: {e}", parent.display()))
}

/// Encode RGBA8 bytes to a PNG file.
fn save_png_rgba8(path: &Path, size: u32, data: &[u8]) -> Result<(), String> {
    let file = fs::File::create(path)
        .map_err(|e| format!("Failed to create output file {}: {e}", path.display()))?;
    let writer = BufWriter::new(file);
    let mut encoder = Encoder::new(writer, size, size);
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut png_writer = encoder
        .write_header()
        .map_err(|e| format!("Failed to write PNG header {}: {e}", path.display()))?;
    png_writer
        .write_image_data(data)
        .map_err(|e| format!("Failed to write PNG data {}: {e}", path.display()))
}

fn main() -> Result<(), String> {
    let output = parse_args()?;
    let data = panel_pixels(TEXTURE_SIZE);
    ensure_parent_dir(&output)?;
    save_png_rgba8(&output, TEXTURE_SIZE, &data)?;
    println!("Panel texture generated: {}", output.display());
    Ok(())
}
