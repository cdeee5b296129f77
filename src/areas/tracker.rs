use crate::areas::session::Session;
use crate::areas::workspace::Workspace;
use crate::artifacts::snapshot::content::BinaryIdentity;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// Shared state of the porcelain commands.
pub struct Tracker {
    writer: RefCell<Box<dyn std::io::Write>>,
    identity: BinaryIdentity,
}

impl Tracker {
    pub fn new(writer: Box<dyn std::io::Write>, identity: BinaryIdentity) -> Self {
        Tracker {
            writer: RefCell::new(writer),
            identity,
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// Capture `before` and fold `after` into a fresh session.
    pub fn compare(&self, before: &Path, after: &Path) -> anyhow::Result<Session> {
        let before = Workspace::new(Self::canonical_dir(before)?);
        let after = Workspace::new(Self::canonical_dir(after)?);

        let mut session = Session::begin(&before, self.identity)?;
        session.rescan(&after)?;

        Ok(session)
    }

    fn canonical_dir(path: &Path) -> anyhow::Result<Box<Path>> {
        let path = path
            .canonicalize()
            .map_err(|err| anyhow::anyhow!("Cannot open directory {:?}: {}", path, err))?;

        if !path.is_dir() {
            anyhow::bail!("The specified path is not a directory: {:?}", path);
        }

        Ok(path.into_boxed_path())
    }
}
