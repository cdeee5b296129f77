use crate::areas::tracker::Tracker;
use crate::artifacts::patch::PatchOptions;
use std::path::Path;

impl Tracker {
    pub fn summary(&self, before: &Path, after: &Path, options: &PatchOptions) -> anyhow::Result<()> {
        let session = self.compare(before, after)?;
        let patch = session.patch(options);

        writeln!(self.writer(), "{}", patch.summary().to_json()?)?;

        Ok(())
    }
}
