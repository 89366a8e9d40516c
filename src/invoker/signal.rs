use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[cfg(unix)]
use signal_hook::consts::{SIGINT, SIGTERM};
#[cfg(unix)]
use signal_hook::SigId;

/// Records SIGINT/SIGTERM while the generator runs instead of dying on them.
///
/// The child shares our process group and receives the same signal, so the
/// blocking wait returns on its own; the caller then checks [`triggered`]
/// and unwinds normally, which lets the staging directory drop.
///
/// Unregistering on drop does not restore the default disposition; the run
/// is about to end anyway.
///
/// [`triggered`]: InterruptGuard::triggered
pub struct InterruptGuard {
    flag: Arc<AtomicBool>,
    #[cfg(unix)]
    ids: Vec<SigId>,
}

impl InterruptGuard {
    #[cfg(unix)]
    pub fn install() -> std::io::Result<Self> {
        let mut guard = Self {
            flag: Arc::new(AtomicBool::new(false)),
            ids: Vec::with_capacity(2),
        };
        for signal in [SIGINT, SIGTERM] {
            let id = signal_hook::flag::register(signal, Arc::clone(&guard.flag))?;
            guard.ids.push(id);
        }
        Ok(guard)
    }

    #[cfg(not(unix))]
    pub fn install() -> std::io::Result<Self> {
        Ok(Self {
            flag: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn triggered(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    #[cfg(test)]
    pub(crate) fn trigger(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }
}

#[cfg(unix)]
impl Drop for InterruptGuard {
    fn drop(&mut self) {
        for id in self.ids.drain(..) {
            signal_hook::low_level::unregister(id);
        }
    }
}
