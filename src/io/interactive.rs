//! Interactive prompt session for selecting input textures
//!
//! Fallback used when the CLI receives no target: asks for the stitching mode,
//! the texture paths, and the output directory, re-prompting until each answer
//! validates.

use crate::io::error::{Result, invalid_input};
use std::path::PathBuf;

/// Paths collected from the user for one stitching run
#[derive(Debug, Clone)]
pub struct InputSelection {
    /// Regular texture path
    pub regular: PathBuf,
    /// CTM texture path, when the user chose connected stitching
    pub ctm: Option<PathBuf>,
    /// Output directory override
    pub output_dir: Option<PathBuf>,
}

/// Run the interactive session on stdin/stdout
///
/// # Errors
///
/// Returns an error when the input stream closes before a valid selection is
/// made.
#[allow(clippy::print_stdout)]
pub fn run_session() -> Result<InputSelection> {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Use a single texture (1), or a regular and a ctm texture (2)");
    let use_ctm = read_choice(&mut lines)? == 2;

    println!("Select the path to the regular texture");
    let regular = read_texture_path(&mut lines)?;

    let ctm = if use_ctm {
        println!("Select the path to the CTM texture");
        Some(read_texture_path(&mut lines)?)
    } else {
        None
    };

    println!("Use a custom output directory? (y/n)");
    let output_dir = if read_yes_no(&mut lines)? {
        println!("Please select a custom output directory:");
        Some(read_directory(&mut lines)?)
    } else {
        None
    };

    Ok(InputSelection {
        regular,
        ctm,
        output_dir,
    })
}

/// Read a stitching-mode choice, accepting `1`/`2` or `one`/`two`
///
/// # Errors
///
/// Returns an error when the input stream closes before a valid choice.
#[allow(clippy::print_stdout)]
pub fn read_choice(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> Result<u8> {
    loop {
        let input = next_line(lines)?;

        let choice = if input.eq_ignore_ascii_case("one") {
            Some(1)
        } else if input.eq_ignore_ascii_case("two") {
            Some(2)
        } else {
            input.parse::<u8>().ok()
        };

        if let Some(c @ (1 | 2)) = choice {
            return Ok(c);
        }
        println!("Please select a valid input (1 or 2)");
    }
}

/// Read a path to an existing PNG file, re-prompting until one validates
///
/// # Errors
///
/// Returns an error when the input stream closes before a valid path.
#[allow(clippy::print_stdout)]
pub fn read_texture_path(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<PathBuf> {
    loop {
        let input = next_line(lines)?;
        let path = PathBuf::from(&input);

        let is_png = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
        if !is_png {
            println!("Given path isn't a png. Please select a png file");
            continue;
        }

        if !path.is_file() {
            println!("Given file doesn't exist. Please select a valid file");
            continue;
        }

        return Ok(path);
    }
}

/// Read a yes/no answer
///
/// # Errors
///
/// Returns an error when the input stream closes before a valid answer.
#[allow(clippy::print_stdout)]
pub fn read_yes_no(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> Result<bool> {
    loop {
        let input = next_line(lines)?;

        if input.eq_ignore_ascii_case("y") {
            return Ok(true);
        }
        if input.eq_ignore_ascii_case("n") {
            return Ok(false);
        }

        println!("Please select either \"y\" or \"n\"");
    }
}

/// Read a path to an existing directory, re-prompting until one validates
///
/// # Errors
///
/// Returns an error when the input stream closes before a valid directory.
#[allow(clippy::print_stdout)]
pub fn read_directory(
    lines: &mut impl Iterator<Item = std::io::Result<String>>,
) -> Result<PathBuf> {
    loop {
        let input = next_line(lines)?;
        let path = PathBuf::from(&input);

        if path.is_dir() {
            return Ok(path);
        }

        println!("Please select a valid output directory");
    }
}

fn next_line(lines: &mut impl Iterator<Item = std::io::Result<String>>) -> Result<String> {
    match lines.next() {
        Some(Ok(line)) => Ok(line.trim().to_string()),
        Some(Err(e)) => Err(e.into()),
        None => Err(invalid_input(
            &"input stream closed before a valid selection was made",
        )),
    }
}
