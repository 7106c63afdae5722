#![allow(clippy::module_inception)]

use std::path::Path;

use crate::errors::errors::Error;

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Finds the 1-based line containing `position`, returning the line
/// number, the line's text, and the position within the line.
pub fn get_line_at_position(source: &str, position: usize) -> (usize, String, usize) {
    if position >= source.len() {
        panic!("Position exceeds source length");
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return (line_number, line.to_string(), line_pos);
        }

        start = end;
        line_number += 1;
    }

    panic!("Failed to find line containing position");
}

pub fn display_error(error: &Error, source: &str, file: &Path) {
    /*
        Error: UnknownLexeme (unknown lexeme at offset 6)
        -> task_1.txt
           |
         1 | Dim x @ 1
           | ------^
    */

    let (line, line_text, line_pos) = get_line_at_position(source, error.get_offset());

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    println!("Error: {} ({})", error.get_error_name(), error);
    println!("-> {}", file.as_os_str().to_string_lossy());
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = line_pos - removed_whitespace + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let source = "Dim x\nSet x = 1\nPrint x\n";

        let (line_number, line, line_pos) = super::get_line_at_position(source, 4);
        assert_eq!(line_number, 1);
        assert_eq!(line, "Dim x\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 10);
        assert_eq!(line_number, 2);
        assert_eq!(line, "Set x = 1\n");
        assert_eq!(line_pos, 4);

        let (line_number, line, line_pos) = super::get_line_at_position(source, 16);
        assert_eq!(line_number, 3);
        assert_eq!(line, "Print x\n");
        assert_eq!(line_pos, 0);
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (text, removed) = super::remove_starting_whitespace("   Dim x");
        assert_eq!(text, "Dim x");
        assert_eq!(removed, 3);
    }
}
