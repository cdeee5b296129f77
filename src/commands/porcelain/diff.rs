use crate::areas::tracker::Tracker;
use crate::artifacts::patch::PatchOptions;
use colored::Colorize;
use std::path::Path;

const FILE_HEADER_LINES: usize = 2;

impl Tracker {
    pub fn diff(&self, before: &Path, after: &Path, options: &PatchOptions) -> anyhow::Result<()> {
        let session = self.compare(before, after)?;
        let patch = session.patch(options);

        let mut headers_left = FILE_HEADER_LINES;
        for line in patch.text().lines() {
            if line.is_empty() {
                writeln!(self.writer())?;
                headers_left = FILE_HEADER_LINES;
                continue;
            }

            if headers_left > 0 {
                headers_left -= 1;
                writeln!(self.writer(), "{}", line.bold())?;
            } else {
                self.print_diff_line(line)?;
            }
        }

        Ok(())
    }

    fn print_diff_line(&self, line: &str) -> anyhow::Result<()> {
        match line.chars().next() {
            Some('@') => writeln!(self.writer(), "{}", line.cyan())?,
            Some('-') => writeln!(self.writer(), "{}", line.red())?,
            Some('+') => writeln!(self.writer(), "{}", line.green())?,
            _ => writeln!(self.writer(), "{}", line)?,
        }

        Ok(())
    }
}
