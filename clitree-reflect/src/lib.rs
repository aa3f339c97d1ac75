//! Reflect live command trees back into clitree schemas.
//!
//! A host framework exposes its tree through [`LiveCommand`]; the
//! [`Reflector`] turns it into a [`Schema`](clitree_schema::Schema) that
//! the compiler accepts again. `clap::Command` implements [`LiveCommand`]
//! out of the box, and [`host::build`] goes the other way.

mod clap_command;
mod export;
pub mod host;
mod live;
mod reflector;

pub use export::{ExportError, export, export_all};
pub use live::{LiveCommand, LiveParam};
pub use reflector::{DEFAULT_PERMISSION, Reflector};
