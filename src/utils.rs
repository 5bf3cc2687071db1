// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Misc utility functions.

use std::{
    fs::{File, OpenOptions},
    io::{self, Write},
    path::Path,
    time::Duration,
};

/// Open a file for appending, creating it if needed.
pub fn open_append(file_path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(file_path)
}

/// Writer that forwards everything to two writers.
/// Used to mirror the mismatch lines into a result file.
/// Remembers whether an error came from the second writer.
pub struct Tee<A, B> {
    first: A,
    second: B,
    second_failed: bool,
}

impl<A: Write, B: Write> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Tee {
            first,
            second,
            second_failed: false,
        }
    }

    pub fn second_failed(&self) -> bool {
        self.second_failed
    }

    fn on_second(&mut self, result: io::Result<()>) -> io::Result<()> {
        self.second_failed |= result.is_err();
        result
    }
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        let result = self.second.write_all(buf);
        self.on_second(result)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        let result = self.second.flush();
        self.on_second(result)
    }
}

/// Local time formatted for result file headers.
pub fn timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a number of bytes into a pretty String.
/// e.g. 1048576 is 1 MiB
pub fn format_byte_count(num_bytes: usize) -> String {
    // 2**30 = 1073741824
    if num_bytes > 1073741824 {
        format!("{:.2} GiB", (num_bytes as f64 / 1073741824.0))
    // 2**20 = 1048576
    } else if num_bytes > 1048576 {
        format!("{:.2} MiB", (num_bytes as f64 / 1048576.0))
    // 2**10 = 1024
    } else if num_bytes > 1024 {
        format!("{:.2} KiB", (num_bytes as f64 / 1024.0))
    } else {
        format!("{} B", num_bytes)
    }
}

/// Format a duration with a unit that keeps the number short.
pub fn format_elapsed_time(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs >= 1.0 {
        format!("{:.3} s", secs)
    } else if secs >= 1e-3 {
        format!("{:.3} ms", secs * 1e3)
    } else {
        format!("{:.3} us", secs * 1e6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_counts() {
        assert_eq!(format_byte_count(5000), "4.88 KiB");
        assert_eq!(format_byte_count(512), "512 B");
        assert_eq!(format_byte_count(3 * 1048576), "3.00 MiB");
    }

    #[test]
    fn elapsed_units() {
        assert_eq!(format_elapsed_time(Duration::from_millis(1500)), "1.500 s");
        assert_eq!(format_elapsed_time(Duration::from_millis(2)), "2.000 ms");
        assert_eq!(format_elapsed_time(Duration::from_micros(5)), "5.000 us");
    }

    #[test]
    fn tee_writes_both() {
        let mut a = Vec::new();
        let mut b = Vec::new();
        {
            let mut tee = Tee::new(&mut a, &mut b);
            writeln!(tee, "error on 0: in=0 out=1").unwrap();
        }
        assert_eq!(a, b);
        assert_eq!(a, b"error on 0: in=0 out=1\n");
    }

    struct Broken;

    impl Write for Broken {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn tee_tracks_which_side_failed() {
        let mut tee = Tee::new(Vec::new(), Broken);
        assert!(tee.write_all(b"0").is_err());
        assert!(tee.second_failed());

        let mut tee = Tee::new(Broken, Vec::new());
        assert!(tee.write_all(b"0").is_err());
        assert!(!tee.second_failed());
    }
}
