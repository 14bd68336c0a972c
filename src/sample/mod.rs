//! Pointer sample input boundary.
//!
//! Samples arrive from an external producer (mouse movement, already
//! throttled) as `(x, y, timestamp, counter)` tuples. The pool only
//! ever sees their opaque byte encoding.

mod event;
mod source;

pub use event::{PointerSample, ENCODED_LEN};
pub use source::{MockSampleSource, SampleSource};
