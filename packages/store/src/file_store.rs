//! # Filesystem-backed session store
//!
//! [`FileStore`] is the [`SessionStore`] used on desktop. The session lives in a
//! single JSON file named after [`SESSION_STORAGE_KEY`]:
//!
//! ```text
//! <base_dir>/
//! └── expense-tracker.session.json
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/expense-tracker/` |
//! | Linux | `~/.local/share/expense-tracker/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\expense-tracker\` |
//!
//! The file holds live tokens, so on unix it is created readable by the owner
//! only (`0o600`).

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::session::{Session, SESSION_STORAGE_KEY};
use crate::session_store::SessionStore;

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    pub fn path(&self) -> PathBuf {
        self.base.join(format!("{SESSION_STORAGE_KEY}.json"))
    }
}

impl SessionStore for FileStore {
    async fn get(&self) -> Option<Session> {
        let raw = std::fs::read_to_string(self.path()).ok()?;
        serde_json::from_str(&raw).ok()
    }

    async fn set(&self, session: &Session) {
        let Ok(raw) = serde_json::to_string_pretty(session) else {
            return;
        };
        let _ = std::fs::create_dir_all(&self.base);
        let _ = write_private(&self.path(), raw.as_bytes());
    }

    async fn clear(&self) {
        let _ = std::fs::remove_file(self.path());
    }
}

fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(0o600);
        // `mode` only applies when the file is created.
        if path.exists() {
            std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))?;
        }
    }
    let mut file = options.open(path)?;
    file.write_all(contents)
}
