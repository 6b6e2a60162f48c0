use std::{fmt::Write as _, path::PathBuf};

use pisteet::{GlyphPoints, Layout};

#[derive(clap::Parser, Debug)]
#[command(about = "Print glyph outline points as a browser would place them")]
struct Args {
    /// Character to extract
    #[arg(default_value = "山")]
    character: char,
    /// Path to the font file
    #[arg(short, long, default_value = "fonts/KleeOne-SemiBold.ttf")]
    font: PathBuf,
    /// Index of the face in a font collection
    #[arg(long, default_value_t = 0)]
    index: usize,
    /// Width and height of the square container in pixels
    #[arg(long, default_value_t = Layout::DEFAULT_CONTAINER_SIZE)]
    container_size: f64,
    /// CSS font size in pixels
    #[arg(long, default_value_t = Layout::DEFAULT_FONT_SIZE)]
    font_size: f64,
    /// Print the complete result as JSON instead of the summary
    #[arg(long)]
    full: bool,
}

fn main() {
    env_logger::init();

    use clap::Parser as _;
    let args = Args::parse_from(wild::args());
    let layout = Layout::new(args.container_size, args.font_size);
    let ch = args.character;

    match pisteet::extract_glyph_points(&args.font, args.index, ch, &layout) {
        Ok(Some(result)) => {
            let output = if args.full {
                serde_json::to_string_pretty(&result)
            } else {
                summary(&result)
            };
            match output {
                Ok(output) => println!("{output}"),
                Err(e) => {
                    eprintln!("error: {e}");
                    std::process::exit(1);
                }
            }
        }
        Ok(None) => {
            eprintln!(
                "error: '{ch}' (U+{:04X}) was not found in {}",
                ch as u32,
                args.font.display()
            );
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

/// Formats the point list followed by the flattened outline as JSON.
fn summary(result: &GlyphPoints) -> Result<String, serde_json::Error> {
    let mut out = String::new();
    // writing to a String cannot fail
    let _ = writeln!(out, "=== 「{}」 ===", result.character);
    let _ = writeln!(out, "contours: {}", result.contour_count);
    let _ = writeln!(out, "points: {}", result.total_points);
    out.push('\n');
    out.push_str("--- points ---\n");
    for point in &result.points {
        let _ = writeln!(out, "  {}: ({:?}, {:?})", point.id, point.x, point.y);
    }
    out.push('\n');
    out.push_str("--- outline JSON ---\n");
    out.push_str(&serde_json::to_string(&result.outline())?);
    Ok(out)
}
