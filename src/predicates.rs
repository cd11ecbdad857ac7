//! Small graph predicates shared by the element decision procedures.
//!
//! These encode the recurring local patterns classification asks
//! about: "is this oxygen part of a carboxylate", "is there an amide
//! carbonyl one bond away", "do two neighbors look sp2". They read the
//! molecule (and, where π counts are involved, the
//! [`PropertyCache`](crate::PropertyCache)) without modifying either.

use petgraph::graph::NodeIndex;

use crate::bond::BondOrder;
use crate::element::Element;
use crate::mol::Mol;
use crate::properties::PropertyCache;
use crate::traits::{
    HasAmbiguousOrder, HasAtomicNum, HasBondAromaticity, HasBondOrder, HasFormalCharge,
    HasHybridization,
};
use crate::Hybridization;

/// Formal charge is set and non-zero.
pub fn is_charged<A: HasFormalCharge>(atom: &A) -> bool {
    matches!(atom.formal_charge(), Some(c) if c != 0)
}

/// Hybridization has been assigned.
pub fn has_hybridization<A: HasHybridization>(atom: &A) -> bool {
    atom.hybridization().is_some()
}

/// At least two non-hydrogen neighbors of `atom` look sp2: declared
/// SP2 hybridization, at least one π bond, or an aromatic bond to
/// `atom`. Evaluation stops as soon as two are found.
pub fn both_neighbors_are_sp2<A, B>(
    mol: &Mol<A, B>,
    cache: &PropertyCache,
    atom: NodeIndex,
) -> bool
where
    A: HasAtomicNum + HasHybridization,
    B: HasBondAromaticity,
{
    let mut count = 0;
    for edge in mol.bonds_of(atom) {
        if count >= 2 {
            break;
        }
        let neighbor = match mol.bond_other_end(edge, atom) {
            Some(n) => n,
            None => continue,
        };
        if mol.atom(neighbor).atomic_num() == Element::H.atomic_num() {
            continue;
        }
        if mol.atom(neighbor).hybridization() == Some(Hybridization::SP2)
            || cache.pi_bond_count(neighbor) > 0
            || mol.bond(edge).is_aromatic()
        {
            count += 1;
        }
    }
    count >= 2
}

/// Whether `atom` is one of the two oxygens of a carboxylate group.
///
/// The oxygen must have a single carbon neighbor carrying exactly one
/// single bond to a −1 oxygen and exactly one double bond to a neutral
/// oxygen, and no further oxygens. A lone alkoxide or ketone oxygen
/// does not qualify.
pub fn is_carboxylate<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> bool
where
    A: HasAtomicNum + HasFormalCharge,
    B: HasBondOrder,
{
    let mut neighbors = mol.neighbors(atom);
    let carbon = match (neighbors.next(), neighbors.next()) {
        (Some(c), None) => c,
        _ => return false,
    };
    if mol.atom(carbon).atomic_num() != Element::C.atomic_num() {
        return false;
    }

    let mut oxygen_count = 0;
    let mut single_bonded_negative = 0;
    let mut double_bonded_neutral = 0;
    for edge in mol.bonds_of(carbon) {
        let neighbor = match mol.bond_other_end(edge, carbon) {
            Some(n) => n,
            None => continue,
        };
        if mol.atom(neighbor).atomic_num() != Element::O.atomic_num() {
            continue;
        }
        oxygen_count += 1;
        match mol.bond(edge).bond_order() {
            Some(BondOrder::Single) if mol.atom(neighbor).formal_charge() == Some(-1) => {
                single_bonded_negative += 1;
            }
            Some(BondOrder::Double) => double_bonded_neutral += 1,
            _ => {}
        }
    }
    oxygen_count == 2 && single_bonded_negative == 1 && double_bonded_neutral == 1
}

/// A carbon neighbor of `atom` carries exactly one double bond to oxygen.
pub fn is_amide<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> bool
where
    A: HasAtomicNum,
    B: HasBondOrder,
{
    mol.neighbors(atom).any(|n| {
        mol.atom(n).atomic_num() == Element::C.atomic_num()
            && count_double_bonds_to(mol, n, Element::O) == 1
    })
}

/// A carbon neighbor of `atom` carries exactly one double bond to sulfur.
pub fn is_thioamide<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> bool
where
    A: HasAtomicNum,
    B: HasBondOrder,
{
    mol.neighbors(atom).any(|n| {
        mol.atom(n).atomic_num() == Element::C.atomic_num()
            && count_double_bonds_to(mol, n, Element::S) == 1
    })
}

/// Whether `atom` is the only heteroatom in its aromatic
/// neighborhood, looking two bond spheres out along aromatic bonds.
///
/// Fails as soon as an aromatic-bonded first- or second-sphere
/// neighbor (other than `atom` itself) is non-carbon. Distinguishes
/// the lone pyrrole-type nitrogen from nitrogens that share their ring
/// with further heteroatoms.
pub fn is_single_hetero_atom<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> bool
where
    A: HasAtomicNum,
    B: HasBondAromaticity,
{
    for edge in mol.bonds_of(atom) {
        if !mol.bond(edge).is_aromatic() {
            continue;
        }
        let first = match mol.bond_other_end(edge, atom) {
            Some(n) => n,
            None => continue,
        };
        if mol.atom(first).atomic_num() != Element::C.atomic_num() {
            return false;
        }
        for edge2 in mol.bonds_of(first) {
            if !mol.bond(edge2).is_aromatic() {
                continue;
            }
            let second = match mol.bond_other_end(edge2, first) {
                Some(n) => n,
                None => continue,
            };
            if second != atom && mol.atom(second).atomic_num() != Element::C.atomic_num() {
                return false;
            }
        }
    }
    true
}

/// Count of incident double bonds whose far end is `element`.
pub fn count_double_bonds_to<A, B>(mol: &Mol<A, B>, atom: NodeIndex, element: Element) -> usize
where
    A: HasAtomicNum,
    B: HasBondOrder,
{
    mol.bonds_of(atom)
        .filter(|&edge| mol.bond(edge).bond_order() == Some(BondOrder::Double))
        .filter_map(|edge| mol.bond_other_end(edge, atom))
        .filter(|&n| mol.atom(n).atomic_num() == element.atomic_num())
        .count()
}

/// Number of explicit hydrogen neighbors.
pub fn count_explicit_hydrogens<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> usize
where
    A: HasAtomicNum,
{
    mol.neighbors(atom)
        .filter(|&n| mol.atom(n).atomic_num() == Element::H.atomic_num())
        .count()
}

/// Any incident bond flagged aromatic.
pub fn has_aromatic_bond<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> bool
where
    B: HasBondAromaticity,
{
    mol.bonds_of(atom).any(|edge| mol.bond(edge).is_aromatic())
}

/// Any incident bond flagged single-or-double.
pub fn has_ambiguous_bond<A, B>(mol: &Mol<A, B>, atom: NodeIndex) -> bool
where
    B: HasAmbiguousOrder,
{
    mol.bonds_of(atom)
        .any(|edge| mol.bond(edge).is_single_or_double())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;

    fn atom(element: Element) -> Atom {
        Atom::from_element(element)
    }

    fn bond(order: BondOrder) -> Bond {
        Bond {
            order: Some(order),
            ..Bond::default()
        }
    }

    fn aromatic_bond() -> Bond {
        Bond {
            is_aromatic: true,
            ..Bond::default()
        }
    }

    /// acetate anion: CH3-C(=O)[O-]
    fn acetate() -> (Mol<Atom, Bond>, NodeIndex, NodeIndex) {
        let mut mol = Mol::new();
        let methyl = mol.add_atom(atom(Element::C));
        let carboxyl = mol.add_atom(atom(Element::C));
        let o_minus = mol.add_atom(Atom {
            formal_charge: Some(-1),
            ..atom(Element::O)
        });
        let o_double = mol.add_atom(atom(Element::O));
        mol.add_bond(methyl, carboxyl, bond(BondOrder::Single));
        mol.add_bond(carboxyl, o_minus, bond(BondOrder::Single));
        mol.add_bond(carboxyl, o_double, bond(BondOrder::Double));
        (mol, o_minus, o_double)
    }

    #[test]
    fn charged_predicate() {
        assert!(is_charged(&Atom {
            formal_charge: Some(-1),
            ..atom(Element::O)
        }));
        assert!(!is_charged(&Atom {
            formal_charge: Some(0),
            ..atom(Element::O)
        }));
        assert!(!is_charged(&atom(Element::O)));
    }

    #[test]
    fn carboxylate_both_oxygens() {
        let (mol, o_minus, o_double) = acetate();
        assert!(is_carboxylate(&mol, o_minus));
        assert!(is_carboxylate(&mol, o_double));
    }

    #[test]
    fn alkoxide_is_not_carboxylate() {
        // CH3-[O-]: only one oxygen on the carbon
        let mut mol = Mol::<Atom, Bond>::new();
        let c = mol.add_atom(atom(Element::C));
        let o = mol.add_atom(Atom {
            formal_charge: Some(-1),
            ..atom(Element::O)
        });
        mol.add_bond(c, o, bond(BondOrder::Single));
        assert!(!is_carboxylate(&mol, o));
    }

    #[test]
    fn carbonate_like_is_not_carboxylate() {
        // three oxygens on the carbon
        let (mut mol, o_minus, _) = acetate();
        let carbon = mol.neighbors(o_minus).next().unwrap();
        let extra = mol.add_atom(atom(Element::O));
        mol.add_bond(carbon, extra, bond(BondOrder::Single));
        assert!(!is_carboxylate(&mol, o_minus));
    }

    #[test]
    fn amide_nitrogen() {
        // acetamide: CH3-C(=O)-N
        let mut mol = Mol::<Atom, Bond>::new();
        let methyl = mol.add_atom(atom(Element::C));
        let carbonyl = mol.add_atom(atom(Element::C));
        let o = mol.add_atom(atom(Element::O));
        let n = mol.add_atom(atom(Element::N));
        mol.add_bond(methyl, carbonyl, bond(BondOrder::Single));
        mol.add_bond(carbonyl, o, bond(BondOrder::Double));
        mol.add_bond(carbonyl, n, bond(BondOrder::Single));
        assert!(is_amide(&mol, n));
        assert!(!is_thioamide(&mol, n));
        assert_eq!(count_double_bonds_to(&mol, carbonyl, Element::O), 1);
    }

    #[test]
    fn thioamide_nitrogen() {
        let mut mol = Mol::<Atom, Bond>::new();
        let carbonyl = mol.add_atom(atom(Element::C));
        let s = mol.add_atom(atom(Element::S));
        let n = mol.add_atom(atom(Element::N));
        mol.add_bond(carbonyl, s, bond(BondOrder::Double));
        mol.add_bond(carbonyl, n, bond(BondOrder::Single));
        assert!(is_thioamide(&mol, n));
        assert!(!is_amide(&mol, n));
    }

    #[test]
    fn both_neighbors_sp2_via_pi_bonds() {
        // O bridging two carbonyl carbons: C(=O)-O-C(=O)
        let mut mol = Mol::<Atom, Bond>::new();
        let o = mol.add_atom(atom(Element::O));
        let c1 = mol.add_atom(atom(Element::C));
        let c2 = mol.add_atom(atom(Element::C));
        let o1 = mol.add_atom(atom(Element::O));
        let o2 = mol.add_atom(atom(Element::O));
        mol.add_bond(o, c1, bond(BondOrder::Single));
        mol.add_bond(o, c2, bond(BondOrder::Single));
        mol.add_bond(c1, o1, bond(BondOrder::Double));
        mol.add_bond(c2, o2, bond(BondOrder::Double));
        let cache = PropertyCache::build(&mol);
        assert!(both_neighbors_are_sp2(&mol, &cache, o));
        assert!(!both_neighbors_are_sp2(&mol, &cache, c1));
    }

    #[test]
    fn both_neighbors_sp2_via_declared_hybridization() {
        let mut mol = Mol::<Atom, Bond>::new();
        let n = mol.add_atom(atom(Element::N));
        let c1 = mol.add_atom(Atom {
            hybridization: Some(Hybridization::SP2),
            ..atom(Element::C)
        });
        let c2 = mol.add_atom(Atom {
            hybridization: Some(Hybridization::SP2),
            ..atom(Element::C)
        });
        mol.add_bond(n, c1, bond(BondOrder::Single));
        mol.add_bond(n, c2, bond(BondOrder::Single));
        let cache = PropertyCache::build(&mol);
        assert!(both_neighbors_are_sp2(&mol, &cache, n));
    }

    #[test]
    fn hydrogen_neighbors_ignored_for_sp2() {
        let mut mol = Mol::<Atom, Bond>::new();
        let n = mol.add_atom(atom(Element::N));
        let h1 = mol.add_atom(atom(Element::H));
        let h2 = mol.add_atom(atom(Element::H));
        mol.add_bond(n, h1, aromatic_bond());
        mol.add_bond(n, h2, aromatic_bond());
        let cache = PropertyCache::build(&mol);
        assert!(!both_neighbors_are_sp2(&mol, &cache, n));
    }

    #[test]
    fn single_hetero_atom_walk() {
        // pyrrole-like ring of one N and four aromatic carbons
        let mut mol = Mol::<Atom, Bond>::new();
        let n = mol.add_atom(atom(Element::N));
        let cs: Vec<_> = (0..4).map(|_| mol.add_atom(atom(Element::C))).collect();
        mol.add_bond(n, cs[0], aromatic_bond());
        mol.add_bond(cs[0], cs[1], aromatic_bond());
        mol.add_bond(cs[1], cs[2], aromatic_bond());
        mol.add_bond(cs[2], cs[3], aromatic_bond());
        mol.add_bond(cs[3], n, aromatic_bond());
        assert!(is_single_hetero_atom(&mol, n));

        // imidazole-like: a second nitrogen two bonds away
        let mut mol2 = Mol::<Atom, Bond>::new();
        let n1 = mol2.add_atom(atom(Element::N));
        let c1 = mol2.add_atom(atom(Element::C));
        let n2 = mol2.add_atom(atom(Element::N));
        let c2 = mol2.add_atom(atom(Element::C));
        let c3 = mol2.add_atom(atom(Element::C));
        mol2.add_bond(n1, c1, aromatic_bond());
        mol2.add_bond(c1, n2, aromatic_bond());
        mol2.add_bond(n2, c2, aromatic_bond());
        mol2.add_bond(c2, c3, aromatic_bond());
        mol2.add_bond(c3, n1, aromatic_bond());
        assert!(!is_single_hetero_atom(&mol2, n1));
    }

    #[test]
    fn explicit_hydrogen_count() {
        let mut mol = Mol::<Atom, Bond>::new();
        let c = mol.add_atom(atom(Element::C));
        let h1 = mol.add_atom(atom(Element::H));
        let h2 = mol.add_atom(atom(Element::H));
        let o = mol.add_atom(atom(Element::O));
        mol.add_bond(c, h1, bond(BondOrder::Single));
        mol.add_bond(c, h2, bond(BondOrder::Single));
        mol.add_bond(c, o, bond(BondOrder::Single));
        assert_eq!(count_explicit_hydrogens(&mol, c), 2);
        assert_eq!(count_explicit_hydrogens(&mol, o), 0);
    }

    #[test]
    fn ambiguous_bond_flag() {
        let mut mol = Mol::<Atom, Bond>::new();
        let a = mol.add_atom(atom(Element::C));
        let b = mol.add_atom(atom(Element::C));
        mol.add_bond(
            a,
            b,
            Bond {
                order: None,
                single_or_double: true,
                ..Bond::default()
            },
        );
        assert!(has_ambiguous_bond(&mol, a));
        assert!(!has_aromatic_bond(&mol, a));
    }
}
