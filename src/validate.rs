//! Acceptance validation: the final check between a candidate atom
//! type and the atom's actual bonding.

use petgraph::graph::NodeIndex;

use crate::bond::BondOrder;
use crate::dictionary::AtomTypeDefinition;
use crate::mol::Mol;
use crate::traits::{HasAmbiguousOrder, HasBondOrder, HasFormalCharge, HasImplicitHydrogens};

/// How neighbor counts are reconciled during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PerceptionMode {
    /// Count implicit hydrogens toward the candidate's neighbor total;
    /// accept under-coordinated atoms, reject over-coordinated ones.
    #[default]
    RequireNothing,
    /// Every hydrogen must be an explicit graph atom: the explicit
    /// neighbor count must equal the candidate's exactly.
    RequireExplicitHydrogens,
}

/// Whether `atom` is consistent with the candidate type `def`.
///
/// Four checks, all of which must pass: neighbor count (per `mode`),
/// per-bond maximum order, bond-order-sum valency, and formal charge.
/// Rejection is an ordinary outcome — the decision procedures respond
/// by trying their next candidate.
pub fn accepts<A, B>(
    mol: &Mol<A, B>,
    atom: NodeIndex,
    def: &AtomTypeDefinition,
    mode: PerceptionMode,
) -> bool
where
    A: HasFormalCharge + HasImplicitHydrogens,
    B: HasBondOrder + HasAmbiguousOrder,
{
    let explicit = mol.neighbors(atom).count();
    match mode {
        PerceptionMode::RequireExplicitHydrogens => {
            if explicit != def.formal_neighbor_count as usize {
                return false;
            }
        }
        PerceptionMode::RequireNothing => {
            if let Some(hydrogens) = mol.atom(atom).implicit_hydrogen_count() {
                if explicit + hydrogens as usize > def.formal_neighbor_count as usize {
                    return false;
                }
            }
        }
    }

    // Types without a max bond order describe unbonded species; their
    // zero valency and neighbor count fence off bonded atoms, so the
    // per-bond scan only applies when a maximum is declared.
    if let Some(max) = def.max_bond_order {
        for edge in mol.bonds_of(atom) {
            let bond = mol.bond(edge);
            match bond.bond_order() {
                Some(order) => {
                    if order > max {
                        return false;
                    }
                }
                None => {
                    // An unresolved single-or-double bond is fine for a
                    // single- or double-order type; a wholly unknown
                    // order never validates.
                    if !bond.is_single_or_double()
                        || !matches!(max, BondOrder::Single | BondOrder::Double)
                    {
                        return false;
                    }
                }
            }
        }
    }

    let order_sum: u32 = mol
        .bonds_of(atom)
        .filter_map(|edge| mol.bond(edge).bond_order())
        .map(|order| order.numeric() as u32)
        .sum();
    if order_sum > def.valency() as u32 {
        return false;
    }

    if let Some(charge) = mol.atom(atom).formal_charge() {
        if charge != def.formal_charge {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::dictionary::AtomTypeCatalog;
    use crate::element::Element;

    fn catalog() -> AtomTypeCatalog {
        AtomTypeCatalog::builtin()
    }

    fn methane_like(hydrogens: Option<u8>) -> (Mol<Atom, Bond>, NodeIndex) {
        let mut mol = Mol::new();
        let c = mol.add_atom(Atom {
            implicit_hydrogen_count: hydrogens,
            ..Atom::from_element(Element::C)
        });
        (mol, c)
    }

    #[test]
    fn implicit_mode_allows_fewer_neighbors() {
        let (mol, c) = methane_like(Some(2));
        let catalog = catalog();
        let def = catalog.lookup("C.sp3").unwrap();
        assert!(accepts(&mol, c, def, PerceptionMode::RequireNothing));
    }

    #[test]
    fn implicit_mode_rejects_excess_neighbors() {
        let (mol, c) = methane_like(Some(5));
        let catalog = catalog();
        let def = catalog.lookup("C.sp3").unwrap();
        assert!(!accepts(&mol, c, def, PerceptionMode::RequireNothing));
    }

    #[test]
    fn unknown_hydrogen_count_skips_neighbor_check() {
        let (mol, c) = methane_like(None);
        let catalog = catalog();
        let def = catalog.lookup("C.sp3").unwrap();
        assert!(accepts(&mol, c, def, PerceptionMode::RequireNothing));
    }

    #[test]
    fn explicit_mode_requires_exact_count() {
        let mut mol = Mol::<Atom, Bond>::new();
        let c = mol.add_atom(Atom::from_element(Element::C));
        let hs: Vec<_> = (0..4)
            .map(|_| mol.add_atom(Atom::from_element(Element::H)))
            .collect();
        for h in &hs {
            mol.add_bond(c, *h, Bond::default());
        }
        let catalog = catalog();
        let def = catalog.lookup("C.sp3").unwrap();
        assert!(accepts(&mol, c, def, PerceptionMode::RequireExplicitHydrogens));
        // three explicit hydrogens is not an exact match
        let mut mol3 = Mol::<Atom, Bond>::new();
        let c3 = mol3.add_atom(Atom::from_element(Element::C));
        for _ in 0..3 {
            let h = mol3.add_atom(Atom::from_element(Element::H));
            mol3.add_bond(c3, h, Bond::default());
        }
        assert!(!accepts(&mol3, c3, def, PerceptionMode::RequireExplicitHydrogens));
    }

    #[test]
    fn bond_order_above_declared_max_rejects() {
        let mut mol = Mol::<Atom, Bond>::new();
        let a = mol.add_atom(Atom::from_element(Element::C));
        let b = mol.add_atom(Atom::from_element(Element::C));
        mol.add_bond(
            a,
            b,
            Bond {
                order: Some(BondOrder::Double),
                ..Bond::default()
            },
        );
        let catalog = catalog();
        assert!(!accepts(
            &mol,
            a,
            catalog.lookup("C.sp3").unwrap(),
            PerceptionMode::RequireNothing
        ));
        assert!(accepts(
            &mol,
            a,
            catalog.lookup("C.sp2").unwrap(),
            PerceptionMode::RequireNothing
        ));
    }

    #[test]
    fn ambiguous_bond_needs_single_or_double_type() {
        let mut mol = Mol::<Atom, Bond>::new();
        let a = mol.add_atom(Atom::from_element(Element::C));
        let b = mol.add_atom(Atom::from_element(Element::C));
        mol.add_bond(
            a,
            b,
            Bond {
                order: None,
                single_or_double: true,
                ..Bond::default()
            },
        );
        let catalog = catalog();
        assert!(accepts(
            &mol,
            a,
            catalog.lookup("C.sp2").unwrap(),
            PerceptionMode::RequireNothing
        ));
        assert!(!accepts(
            &mol,
            a,
            catalog.lookup("C.sp").unwrap(),
            PerceptionMode::RequireNothing
        ));
    }

    #[test]
    fn wholly_unknown_bond_order_rejects() {
        let mut mol = Mol::<Atom, Bond>::new();
        let a = mol.add_atom(Atom::from_element(Element::C));
        let b = mol.add_atom(Atom::from_element(Element::C));
        mol.add_bond(
            a,
            b,
            Bond {
                order: None,
                ..Bond::default()
            },
        );
        let catalog = catalog();
        assert!(!accepts(
            &mol,
            a,
            catalog.lookup("C.sp3").unwrap(),
            PerceptionMode::RequireNothing
        ));
    }

    #[test]
    fn valency_overflow_rejects() {
        // nitrogen with two double bonds: order sum 4 exceeds N.sp2's 3
        let mut mol = Mol::<Atom, Bond>::new();
        let n = mol.add_atom(Atom::from_element(Element::N));
        let c1 = mol.add_atom(Atom::from_element(Element::C));
        let c2 = mol.add_atom(Atom::from_element(Element::C));
        for c in [c1, c2] {
            mol.add_bond(
                n,
                c,
                Bond {
                    order: Some(BondOrder::Double),
                    ..Bond::default()
                },
            );
        }
        let catalog = catalog();
        assert!(!accepts(
            &mol,
            n,
            catalog.lookup("N.sp2").unwrap(),
            PerceptionMode::RequireNothing
        ));
    }

    #[test]
    fn formal_charge_must_match_when_set() {
        let mut mol = Mol::<Atom, Bond>::new();
        let o = mol.add_atom(Atom {
            formal_charge: Some(-1),
            ..Atom::from_element(Element::O)
        });
        let c = mol.add_atom(Atom::from_element(Element::C));
        mol.add_bond(o, c, Bond::default());
        let catalog = catalog();
        assert!(!accepts(
            &mol,
            o,
            catalog.lookup("O.sp3").unwrap(),
            PerceptionMode::RequireNothing
        ));
        assert!(accepts(
            &mol,
            o,
            catalog.lookup("O.minus").unwrap(),
            PerceptionMode::RequireNothing
        ));
    }

    #[test]
    fn unset_charge_skips_charge_check() {
        let (mol, c) = methane_like(None);
        let catalog = catalog();
        assert!(accepts(
            &mol,
            c,
            catalog.lookup("C.sp3").unwrap(),
            PerceptionMode::RequireNothing
        ));
    }
}
