//! Ordered containers with comparator-defined equivalence.
//!
//! The central type is [`skiplist::SkipSet`], an ordered set backed by a skiplist whose slots
//! live in a [`arena::TypedArena`] and are linked by stable handles.

#[macro_use]
extern crate log;
extern crate rand;

pub mod arena;
pub mod skiplist;
