//! Interactive rectangle menu.
//!
//! Reads from any `BufRead` and writes prompts to any `Write`, so the loop runs
//! the same against a terminal or an in-memory script. End of input exits.

use anyhow::Result;
use overlap::{resolve, Polygon, ShapeKind};
use std::io::{BufRead, Write};
use tracing::{debug, info};

use crate::input::{parse_coords, polygon_from_coords};
use crate::report;

const RECT_COORDS: usize = 8;

const BANNER: &str = "\
 ----------------------------------------------------------
|             Rectangle Features Analyzer                  |
 ----------------------------------------------------------
";

const MENU: &str = "
MENU
[1] Enter Rectangular Coordinates
[2] About
[3] Exit Program

Enter your choice: ";

const ABOUT: &str = "
This is a utility application that analyzes 2-D rectangular
objects to detect their mutual spatial characteristics.
The app supports rectangles that are not only aligned with
the two axes but are also rotated at an angle to the axes.
";

const FORMAT_HELP: &str = "
Enter the 8 coordinate vertex points, one pair at a time.
Start from any vertex. Proceed clockwise or anti-clockwise.

Format specified as below (space or newline separated):
x1 y1 x2 y2 x3 y3 x4 y4

Coordinate sequence specified as below (Can be rotated in any desired direction):
(x1,y1) ____________ (x2,y2)
       |            |
       |            |
(x4,y4)|____________|(x3,y3)

";

pub fn run<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<()> {
    write!(out, "{BANNER}")?;
    loop {
        write!(out, "{MENU}")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        match line.trim().parse::<u16>() {
            Ok(1) => {
                if !analyze_pair(input, out)? {
                    return Ok(());
                }
            }
            Ok(2) => write!(out, "{ABOUT}")?,
            Ok(3) => return Ok(()),
            _ => writeln!(out, "Invalid choice. Please try again.\n")?,
        }
    }
}

/// Returns `false` if input ended before both rectangles were read.
fn analyze_pair<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<bool> {
    write!(out, "{FORMAT_HELP}[Rectangle A] Coordinates: ")?;
    let Some(a) = read_rectangle(input, out)? else {
        return Ok(false);
    };
    write!(out, "\n[Rectangle B] Coordinates: ")?;
    let Some(b) = read_rectangle(input, out)? else {
        return Ok(false);
    };
    let r = resolve(&a, &b);
    info!(relation = %r.relation, "analyzed");
    write!(out, "\n{}", report::render(&a, &b, &r))?;
    Ok(true)
}

/// Collect 8 numbers (across lines if needed) until they form a rectangle.
fn read_rectangle<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Polygon>> {
    let mut coords: Vec<f32> = Vec::with_capacity(RECT_COORDS);
    loop {
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        match parse_coords(&line) {
            Ok(values) => coords.extend(values),
            Err(e) => {
                debug!(error = %e, "rejected coordinates");
                coords.clear();
                write!(out, "Invalid input. Please try again.\n\nCoordinates: ")?;
                continue;
            }
        }
        if coords.len() < RECT_COORDS {
            continue;
        }
        coords.truncate(RECT_COORDS);
        match polygon_from_coords("Rectangle", &coords, ShapeKind::Rectangle) {
            Ok(rect) => return Ok(Some(rect)),
            Err(e) => {
                debug!(error = ?e, "rejected rectangle");
                coords.clear();
                write!(
                    out,
                    "Ill formed rectangle. Coordinates incorrect or non-sequential. \
                     Please try again.\n\nCoordinates: "
                )?;
            }
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
