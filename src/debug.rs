use crate::{Matrix, Scalar};
use lazy_static::lazy_static;
use std::fmt;
use std::io;

/// Layout options for the textual rendering of a matrix.
///
/// Each element is right-aligned to `width` and printed with `precision`
/// fractional digits (ignored for integers), followed by `separator`.
/// Each row ends with `row_end`; `trailing_blank_line` emits one more
/// `row_end` after the last row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugSettings {
    pub width: usize,
    pub precision: usize,
    pub separator: String,
    pub row_end: String,
    pub trailing_blank_line: bool,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            width: 8,
            precision: 3,
            separator: " ".to_string(),
            row_end: "\n".to_string(),
            trailing_blank_line: false,
        }
    }
}

impl DebugSettings {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_row_end(mut self, row_end: impl Into<String>) -> Self {
        self.row_end = row_end.into();
        self
    }

    pub fn with_trailing_blank_line(mut self, on: bool) -> Self {
        self.trailing_blank_line = on;
        self
    }
}

lazy_static! {
    /// Settings used by the `Display` impl of [`Matrix`].
    pub static ref DEFAULT_DEBUG: DebugSettings = DebugSettings::default();
}

/// A matrix paired with the settings to render it with.
pub struct Displayed<'a, T: Scalar> {
    m: &'a Matrix<T>,
    settings: &'a DebugSettings,
}

impl<'a, T: Scalar> fmt::Display for Displayed<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.settings;
        for r in 0..self.m.rows() {
            let start = r * self.m.cols();
            for x in &self.m.as_slice()[start..start + self.m.cols()] {
                write!(f, "{:>w$.p$}", x, w = s.width, p = s.precision)?;
                f.write_str(&s.separator)?;
            }
            f.write_str(&s.row_end)?;
        }
        if s.trailing_blank_line {
            f.write_str(&s.row_end)?;
        }
        Ok(())
    }
}

impl<T: Scalar> Matrix<T> {
    pub fn display_with<'a>(&'a self, settings: &'a DebugSettings) -> Displayed<'a, T> {
        Displayed { m: self, settings }
    }

    pub fn print<W: io::Write>(&self, out: &mut W, settings: &DebugSettings) -> io::Result<()> {
        write!(out, "{}", self.display_with(settings))
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(&DEFAULT_DEBUG), f)
    }
}

impl<T: Scalar> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.shape())?;
        if self.cols == 0 {
            return f.write_str("[]");
        }
        f.write_str("[")?;
        for (i, row) in self.as_slice().chunks(self.cols).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(&format!("{:?}", row))?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_default() {
        let m = matrix![[1, 2], [3, 4]];
        assert_eq!(m.to_string(), "       1        2 \n       3        4 \n");
    }

    #[test]
    fn test_print_settings() {
        let m = matrix![[1.5f64, -2.0], [0.25, 10.0]];
        let s = DebugSettings::default()
            .with_width(6)
            .with_precision(2)
            .with_separator("|")
            .with_row_end(";\n")
            .with_trailing_blank_line(true);
        let mut out = Vec::new();
        m.print(&mut out, &s).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "  1.50| -2.00|;\n  0.25| 10.00|;\n;\n"
        );
    }

    #[test]
    fn test_display_empty() {
        let m = Matrix::<f32>::new(0, 0);
        assert_eq!(m.to_string(), "");
        let s = DebugSettings::default().with_trailing_blank_line(true);
        assert_eq!(m.display_with(&s).to_string(), "\n");
    }

    #[test]
    fn test_debug() {
        let m = matrix![[1, 2], [3, 4]];
        assert_eq!(format!("{:?}", m), "2x2 [[1, 2], [3, 4]]");
        assert_eq!(format!("{:?}", Matrix::<i8>::new(3, 0)), "3x0 []");
    }
}
