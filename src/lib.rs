pub mod atom;
pub mod bond;
pub mod dictionary;
pub mod element;
pub mod mol;
pub mod predicates;
pub mod properties;
pub mod rings;
pub mod traits;
pub mod typer;
pub mod validate;

pub use atom::{Atom, Hybridization};
pub use bond::{Bond, BondOrder};
pub use dictionary::{AtomTypeCatalog, AtomTypeDefinition, UnknownAtomType};
pub use element::Element;
pub use mol::Mol;
pub use properties::PropertyCache;
pub use rings::CyclicFragments;
pub use typer::AtomTyper;
pub use validate::{accepts, PerceptionMode};
