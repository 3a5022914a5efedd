//! The operation surface of [`VmwareClient`](crate::VmwareClient), one module per resource family.
//!
//! Every operation validates its options before anything is sent and has a
//! `_with_cancellation` twin that aborts the call when the token fires.

mod catalog;
mod clusters;
mod director_sites;
mod pvdcs;
mod vdcs;
