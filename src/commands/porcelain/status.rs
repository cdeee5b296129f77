use crate::areas::tracker::Tracker;
use crate::artifacts::diff::change_set::DiffFilter;
use std::path::Path;

impl Tracker {
    pub fn status(&self, before: &Path, after: &Path, filter: DiffFilter) -> anyhow::Result<()> {
        let session = self.compare(before, after)?;
        let changes = session.store().changes().filter(filter);

        for (path, change) in changes.iter() {
            writeln!(self.writer(), "{}\t{}", change.status_char(), path)?;
        }

        Ok(())
    }
}
