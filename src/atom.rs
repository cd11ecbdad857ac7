use crate::element::Element;

/// Orbital hybridization of an atom.
///
/// `PLANAR3` is the trigonal-planar state of a formally sp3 atom whose
/// lone pair participates in an adjacent π system (pyrrole nitrogen,
/// furan oxygen). An atom with no assigned hybridization carries `None`
/// instead of a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hybridization {
    SP1,
    SP2,
    SP3,
    PLANAR3,
}

/// Default atom type for a molecular graph node.
///
/// `Atom` stores the intrinsic properties perception reads. Fields that
/// an input format may legitimately leave undetermined — formal charge,
/// implicit hydrogen count, hybridization — are `Option`s, and the
/// distinction between "zero" and "unknown" is significant: several
/// classification rules only fire when a value is actually set.
///
/// # Examples
///
/// ```
/// use atomtyper::{Atom, Element};
///
/// let carbon = Atom {
///     atomic_num: 6,
///     implicit_hydrogen_count: Some(4),
///     ..Atom::default()
/// };
/// assert_eq!(carbon.atomic_num, Element::C.atomic_num());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Atom {
    /// Atomic number (1 = H, 6 = C, 7 = N, …). `0` for pseudo-atoms.
    pub atomic_num: u8,
    /// Formal charge in elementary charge units, or `None` if unset.
    pub formal_charge: Option<i8>,
    /// Number of suppressed hydrogens implied by valence, or `None`
    /// if no hydrogen count has been established.
    pub implicit_hydrogen_count: Option<u8>,
    /// Assigned hybridization, or `None` if not perceived upstream.
    pub hybridization: Option<Hybridization>,
    /// Whether this atom is part of an aromatic system.
    pub is_aromatic: bool,
    /// Pseudo-atom marker (R-groups, attachment points, dummies).
    pub pseudo: bool,
}

impl Atom {
    pub fn from_element(element: Element) -> Self {
        Self {
            atomic_num: element.atomic_num(),
            ..Self::default()
        }
    }
}

impl crate::traits::HasAtomicNum for Atom {
    fn atomic_num(&self) -> u8 {
        self.atomic_num
    }
}

impl crate::traits::HasFormalCharge for Atom {
    fn formal_charge(&self) -> Option<i8> {
        self.formal_charge
    }
}

impl crate::traits::HasImplicitHydrogens for Atom {
    fn implicit_hydrogen_count(&self) -> Option<u8> {
        self.implicit_hydrogen_count
    }
}

impl crate::traits::HasHybridization for Atom {
    fn hybridization(&self) -> Option<Hybridization> {
        self.hybridization
    }
}

impl crate::traits::HasAromaticity for Atom {
    fn is_aromatic(&self) -> bool {
        self.is_aromatic
    }
}

impl crate::traits::HasPseudoFlag for Atom {
    fn is_pseudo(&self) -> bool {
        self.pseudo
    }
}
