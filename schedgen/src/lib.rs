//! SchedGen: crossbar arbiter and choreography synthesis from a pair count.
//!
//! Given N symmetric port/datapath pairs, a [`Schedule`] captures the
//! round-robin priority rotation of every port, and two code generators
//! render it: [`Cirgen`] emits a combinational C scheduler function and
//! [`Scrgen`] emits a Scribble global protocol describing the same decision
//! as a message exchange among 2N roles.

// # Tries to deny all lints (`rustc -W help`).
#![deny(absolute_paths_not_starting_with_crate)]
#![deny(anonymous_parameters)]
#![deny(explicit_outlives_requirements)]
#![deny(keyword_idents)]
#![deny(macro_use_extern_crate)]
#![deny(missing_debug_implementations)]
#![deny(non_ascii_idents)]
#![deny(rust_2018_idioms)]
#![deny(trivial_numeric_casts)]
#![deny(unsafe_op_in_unsafe_fn)]
#![deny(unused_extern_crates)]
#![deny(unused_import_braces)]
#![deny(unused_qualifications)]
#![deny(variant_size_differences)]
//
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![deny(rustdoc::invalid_html_tags)]
#![deny(rustdoc::invalid_rust_codeblocks)]
#![deny(rustdoc::bare_urls)]
#![deny(unreachable_pub)]
//
#![allow(elided_lifetimes_in_paths)]

pub mod cir;
pub mod cirgen;
pub mod codegen;
pub mod package;
pub mod roles;
pub mod schedule;
pub mod scr;
pub mod scrgen;
pub mod utils;

pub use cirgen::Cirgen;
pub use codegen::Codegen;
pub use package::{Package, PackageError};
pub use roles::*;
pub use schedule::*;
pub use scrgen::{ChoreographyMode, Scrgen};
pub use utils::*;
