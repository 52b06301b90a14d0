//! Centralized limits for the emitter.
//!
//! Nodes compile their children recursively, so a hostile or corrupted tree
//! can nest deep enough to overflow the call stack. The emitter counts how
//! many `compile`/`subcompile` frames are active and bails out with an error
//! once the configured depth is exceeded.

/// Maximum nesting of `compile`/`subcompile` calls.
///
/// Used as the default for `EmitterOptions::max_depth`. Each nested node adds
/// a few frames to the call stack; at 1000 levels the emitter stops before
/// running the node and reports `RecursionLimitExceeded`.
///
/// # JavaScript example
///
/// ```javascript
/// // Deeply nested array literal produced by a generated expression tree:
/// [[[[[[[[[[[[[[[[[[[[ /* ... 1000 levels ... */ ]]]]]]]]]]]]]]]]]]]
///
/// // Deeply nested conditional chain:
/// ((a) ? (1) : (((b) ? (2) : (((c) ? (3) : (/* ... */)))))
/// ```
pub const MAX_EMIT_RECURSION_DEPTH: u32 = 1_000;

/// Initial capacity of a sub-compilation buffer.
///
/// Most isolated fragments are single arguments or array elements, so a
/// small allocation avoids regrowth for the common case.
pub const SUBCOMPILE_BUFFER_CAPACITY: usize = 64;
