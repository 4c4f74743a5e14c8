//! Acquire-once management of the hidden off-screen context.
//!
//! Only one hidden window/context should exist per process. Instead of a
//! process-global initialized on first use, the backend that creates the
//! context is injected here and [`OffscreenContext::acquire`] guarantees
//! its `initialize` runs exactly once.

use crate::error::OrbviewError;

/// Backend capable of creating the hidden window / off-screen context.
pub trait RenderBackend {
    /// Create the hidden context. Called at most once per
    /// [`OffscreenContext`].
    ///
    /// # Errors
    ///
    /// Returns [`OrbviewError::Context`] when context creation fails.
    fn initialize(&mut self) -> Result<(), OrbviewError>;
}

/// Acquire-once wrapper around an injected [`RenderBackend`].
#[derive(Debug)]
pub struct OffscreenContext<B: RenderBackend> {
    backend: B,
    initialized: bool,
}

impl<B: RenderBackend> OffscreenContext<B> {
    /// Wrap a backend without initializing it.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            initialized: false,
        }
    }

    /// Whether the backend has been initialized.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Get the backend, initializing it on the first call.
    ///
    /// # Errors
    ///
    /// Propagates the backend's [`OrbviewError::Context`]; a failed
    /// initialization may be retried on the next acquire.
    pub fn acquire(&mut self) -> Result<&mut B, OrbviewError> {
        if !self.initialized {
            self.backend.initialize()?;
            self.initialized = true;
            log::debug!("off-screen context initialized");
        }
        Ok(&mut self.backend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CountingBackend {
        init_calls: u32,
        fail_first: bool,
    }

    impl RenderBackend for CountingBackend {
        fn initialize(&mut self) -> Result<(), OrbviewError> {
            self.init_calls += 1;
            if self.fail_first && self.init_calls == 1 {
                return Err(OrbviewError::Context("boom".to_owned()));
            }
            Ok(())
        }
    }

    #[test]
    fn acquire_initializes_exactly_once() {
        let mut context = OffscreenContext::new(CountingBackend {
            init_calls: 0,
            fail_first: false,
        });
        assert!(!context.is_initialized());
        let _ = context.acquire().unwrap();
        let _ = context.acquire().unwrap();
        let backend = context.acquire().unwrap();
        assert_eq!(backend.init_calls, 1);
        assert!(context.is_initialized());
    }

    #[test]
    fn failed_initialization_can_be_retried() {
        let mut context = OffscreenContext::new(CountingBackend {
            init_calls: 0,
            fail_first: true,
        });
        assert!(context.acquire().is_err());
        assert!(!context.is_initialized());
        let backend = context.acquire().unwrap();
        assert_eq!(backend.init_calls, 2);
    }
}
