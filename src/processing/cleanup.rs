use crate::utils::ExtractionError;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Releases temporary resources (uploaded card photos) once a request is done.
pub trait ResourceCleanup: Send + Sync {
    fn release(&self, handle: &Path) -> std::io::Result<()>;
}

impl<T: ResourceCleanup + ?Sized> ResourceCleanup for Box<T> {
    fn release(&self, handle: &Path) -> std::io::Result<()> {
        (**self).release(handle)
    }
}

/// Deletes the files.
pub struct RemoveFiles;

impl ResourceCleanup for RemoveFiles {
    fn release(&self, handle: &Path) -> std::io::Result<()> {
        std::fs::remove_file(handle)
    }
}

/// Leaves the files in place.
pub struct RetainFiles;

impl ResourceCleanup for RetainFiles {
    fn release(&self, _handle: &Path) -> std::io::Result<()> {
        Ok(())
    }
}

/// Releases its handles when dropped, so cleanup also runs on early return,
/// panic unwinding and future cancellation. Failures are logged only.
pub struct ReleaseGuard<'a, C: ResourceCleanup + ?Sized> {
    cleanup: &'a C,
    handles: Vec<PathBuf>,
}

impl<'a, C: ResourceCleanup + ?Sized> ReleaseGuard<'a, C> {
    pub fn new(cleanup: &'a C, handles: Vec<PathBuf>) -> Self {
        ReleaseGuard { cleanup, handles }
    }
}

impl<C: ResourceCleanup + ?Sized> Drop for ReleaseGuard<'_, C> {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            match self.cleanup.release(&handle) {
                Ok(()) => debug!("Released {}", handle.display()),
                Err(source) => {
                    let err = ExtractionError::ResourceCleanupFailure { path: handle, source };
                    warn!("{}", err);
                }
            }
        }
    }
}
