//! Terminal rendering of values.

use colored::*;
use std::io::{self, stdout, BufWriter};

use crate::value::{write_plain_leaf, Value};


/// Writes value in dotted-pair notation, parens colored by depth.
///
/// With coloring disabled (see colored::control) output matches Display.
pub fn write_colored<W: io::Write>(w: &mut W, value: &Value) -> io::Result<()> {
    fn paren_color(depth: usize) -> (u8, u8, u8) {
        match depth % 6 {
            0 => (0, 255, 204),
            1 => (204, 51, 0),
            2 => (153, 255, 102),
            3 => (153, 102, 255),
            4 => (255, 255, 102),
            _ => (255, 179, 179),
        }
    }

    value.write_pair(
        w,
        0,
        ".",
        &mut |writer, leaf, _depth| match leaf {
            Value::Truth(true) => write!(writer, "{}", "T".green()),
            Value::Truth(false) => write!(writer, "{}", "F".red()),
            Value::Nil => write!(writer, "{}", "NIL".dimmed()),
            _ => write_plain_leaf(writer, leaf),
        },
        &mut |writer, paren, depth| {
            let (r, g, b) = paren_color(depth);
            write!(writer, "{}", paren.truecolor(r, g, b))
        },
    )
}

pub fn print_value(value: &Value) {
    let mut writer = BufWriter::new(stdout());
    if let Err(err) = write_colored(&mut writer, value) {
        println!("print_value error: {:?}", err);
    }
}
