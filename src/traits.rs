use crate::atom::Hybridization;
use crate::bond::BondOrder;

pub trait HasAtomicNum {
    fn atomic_num(&self) -> u8;
}

pub trait HasFormalCharge {
    /// Formal charge, or `None` if no charge has been assigned.
    fn formal_charge(&self) -> Option<i8>;
}

pub trait HasImplicitHydrogens {
    /// Implicit hydrogen count, or `None` if undetermined.
    fn implicit_hydrogen_count(&self) -> Option<u8>;
}

pub trait HasHybridization {
    /// Assigned hybridization, or `None` if unset.
    fn hybridization(&self) -> Option<Hybridization>;
}

pub trait HasAromaticity {
    fn is_aromatic(&self) -> bool;
}

pub trait HasPseudoFlag {
    fn is_pseudo(&self) -> bool;
}

pub trait HasBondOrder {
    /// Bond order, or `None` if the order is not yet known.
    fn bond_order(&self) -> Option<BondOrder>;
}

pub trait HasBondAromaticity {
    fn is_aromatic(&self) -> bool;
}

pub trait HasAmbiguousOrder {
    /// Whether the bond is flagged single-or-double pending resolution.
    fn is_single_or_double(&self) -> bool;
}
