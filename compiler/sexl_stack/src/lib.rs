//! Stack safety for the recursive parser and evaluator.
//!
//! Both stages recurse once per level of call nesting. Two mechanisms keep
//! pathological input from crashing the host:
//!
//! - [`DepthLimit`]: a configurable ceiling on nesting depth. Exceeding it is
//!   an ordinary error the caller can report.
//! - [`ensure_sufficient_stack`]: grows the native stack on demand so that any
//!   depth *below* the limit is actually reachable, regardless of how small
//!   the host thread's stack is.
//!
//! # Platform Support
//!
//! - **Native targets**: Uses the `stacker` crate to grow the stack on demand.
//! - **WASM targets**: No-op passthrough (WASM has its own stack management).

use std::fmt;

/// Default maximum nesting depth for parsing and evaluation.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// If the remaining stack is below the red zone threshold, additional
/// stack space is allocated before calling `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

/// Maximum call nesting depth.
///
/// Depth counts enclosing calls: the top-level expression is at depth 0,
/// the arguments of a top-level call at depth 1, and so on. A call may be
/// entered at any depth strictly below the limit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DepthLimit {
    max: usize,
}

impl DepthLimit {
    /// Create a limit of `max` nested calls.
    pub const fn new(max: usize) -> Self {
        DepthLimit { max }
    }

    /// The configured maximum.
    #[inline]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Check that a call may be entered at `depth`.
    #[inline]
    pub fn check(self, depth: usize) -> Result<(), DepthExceeded> {
        if depth >= self.max {
            Err(DepthExceeded { limit: self.max })
        } else {
            Ok(())
        }
    }
}

impl Default for DepthLimit {
    fn default() -> Self {
        DepthLimit::new(DEFAULT_MAX_DEPTH)
    }
}

/// A call was nested deeper than the configured [`DepthLimit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DepthExceeded {
    /// The limit that was exceeded.
    pub limit: usize,
}

impl fmt::Display for DepthExceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expression nesting exceeds the limit of {}", self.limit)
    }
}

impl std::error::Error for DepthExceeded {}
