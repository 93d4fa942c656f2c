pub mod atom;
pub mod atom_policies;
pub mod cons;
pub mod value;

mod fmt_io_adapter;


pub use atom::{Atom, AtomError, AtomPolicy, ToAtom};
pub use cons::Cons;
pub use value::{write_plain_leaf, HeapValue, Value};
