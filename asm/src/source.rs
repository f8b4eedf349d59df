use std::io::BufRead;

use crate::error::Error;

/// A source file as read from disk. Comment and blank-line handling lives here,
/// outside the assembler core.
#[derive(Debug, Clone)]
pub struct Source {
    pub path: String,
    raw: Vec<String>,
}

impl Source {
    pub fn open(path: &str) -> Result<Self, Error> {
        let file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
        let raw = std::io::BufReader::new(file)
            .lines()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| Error::FileRead(path.to_string(), e))?;
        Ok(Source {
            path: path.to_string(),
            raw,
        })
    }

    pub fn from_text(path: &str, text: &str) -> Self {
        Source {
            path: path.to_string(),
            raw: text.lines().map(str::to_string).collect(),
        }
    }

    /// Original text of a 1-based line.
    pub fn raw(&self, no: usize) -> Option<&str> {
        no.checked_sub(1)
            .and_then(|idx| self.raw.get(idx))
            .map(String::as_str)
    }

    /// Lines with `//` comments and surrounding whitespace removed, skipping
    /// the ones left empty. Line numbers are 1-based.
    pub fn code(&self) -> Vec<(usize, &str)> {
        self.raw
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                let code = match line.split_once("//") {
                    Some((code, _comment)) => code,
                    None => line,
                };
                let code = code.trim();
                (!code.is_empty()).then_some((idx + 1, code))
            })
            .collect()
    }
}
