/*! Segment validation

A segment (one transcribed phonetic token) is judged against two
independent rule sets:
- [classes]: general well-formedness against a static sound-class model,
- [inventory]: membership in a curated segment inventory, with
  canonicalization suggestions for known non-canonical spellings.

Both verdicts are kept side by side in a [Judgement]; a segment may well
fail one rule set and pass the other.
! */
mod classes;
mod inventory;
mod validator;

pub use validator::{Judgement, SegmentValidator, Verdict};
