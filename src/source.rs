//! Input acquisition: command-line text or piped stdin.

use std::io::{self, Read};

use crate::error::{MarqueeError, Result};

/// Upper bound on accepted input, in bytes (one byte reserved).
pub const RAW_BUFFER_SIZE: usize = 256 * 1024;

const MAX_INPUT: usize = RAW_BUFFER_SIZE - 1;

/// Join text arguments into one buffer, one argument per line.
pub fn from_args(args: &[String]) -> Vec<u8> {
    let mut buffer = args.join("\n").into_bytes();
    buffer.truncate(MAX_INPUT);
    buffer
}

/// Read at most the input bound from `reader`.
pub fn from_reader(reader: impl Read) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    reader.take(MAX_INPUT as u64).read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Pick the input: arguments if any, else stdin when it is not a terminal.
///
/// # Errors
/// `NoInput` if neither source supplies any bytes; I/O errors from stdin.
pub fn acquire(args: &[String]) -> Result<Vec<u8>> {
    let buffer = if !args.is_empty() {
        from_args(args)
    } else if atty::isnt(atty::Stream::Stdin) {
        from_reader(io::stdin().lock())?
    } else {
        Vec::new()
    };

    if buffer.is_empty() {
        return Err(MarqueeError::NoInput);
    }
    tracing::debug!(bytes = buffer.len(), "acquired input");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn arguments_become_lines() {
        assert_eq!(from_args(&strings(&["one", "two"])), b"one\ntwo");
        assert_eq!(from_args(&strings(&["solo"])), b"solo");
    }

    #[test]
    fn arguments_are_bounded() {
        let big = "x".repeat(RAW_BUFFER_SIZE * 2);
        assert_eq!(from_args(&[big]).len(), RAW_BUFFER_SIZE - 1);
    }

    #[test]
    fn reader_is_bounded() {
        let data = vec![b'y'; RAW_BUFFER_SIZE + 10];
        let read = from_reader(&data[..]).unwrap();
        assert_eq!(read.len(), RAW_BUFFER_SIZE - 1);
    }

    #[test]
    fn reader_passes_escapes_through() {
        let read = from_reader(&b"\x1b[31mRED\x1b[0m\n"[..]).unwrap();
        assert_eq!(read, b"\x1b[31mRED\x1b[0m\n");
    }

    #[test]
    fn empty_argument_is_no_input() {
        assert!(matches!(acquire(&strings(&[""])), Err(MarqueeError::NoInput)));
    }
}
