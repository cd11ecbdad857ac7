//! Per-atom bond summaries, computed in one pass over all bonds.
//!
//! Classification reads the same four quantities over and over —
//! neighbor count, π-bond count, single-bond count, maximum incident
//! bond order — so they are tabulated up front instead of recomputed
//! per query. The cache is valid for exactly one molecule; build a new
//! one if the graph changes.

use petgraph::graph::NodeIndex;

use crate::bond::BondOrder;
use crate::mol::Mol;
use crate::traits::HasBondOrder;

#[derive(Debug, Clone)]
pub struct PropertyCache {
    neighbor_count: Vec<u32>,
    pi_bond_count: Vec<u32>,
    single_bond_count: Vec<u32>,
    max_bond_order: Vec<Option<BondOrder>>,
}

impl PropertyCache {
    pub fn build<A, B>(mol: &Mol<A, B>) -> Self
    where
        B: HasBondOrder,
    {
        let n = mol.atom_count();
        let mut cache = Self {
            neighbor_count: vec![0; n],
            pi_bond_count: vec![0; n],
            single_bond_count: vec![0; n],
            max_bond_order: vec![None; n],
        };

        for edge in mol.bonds() {
            let order = mol.bond(edge).bond_order();
            let (a, b) = match mol.bond_endpoints(edge) {
                Some(pair) => pair,
                None => continue,
            };
            for end in [a, b] {
                let i = end.index();
                cache.neighbor_count[i] += 1;
                match order {
                    Some(BondOrder::Double) => cache.pi_bond_count[i] += 1,
                    Some(BondOrder::Single) => cache.single_bond_count[i] += 1,
                    _ => {}
                }
                if order > cache.max_bond_order[i] {
                    cache.max_bond_order[i] = order;
                }
            }
        }

        cache
    }

    /// Number of explicit neighbors (bonded atoms) of `atom`.
    pub fn neighbor_count(&self, atom: NodeIndex) -> usize {
        self.neighbor_count[atom.index()] as usize
    }

    /// Number of double-order bonds incident on `atom`.
    pub fn pi_bond_count(&self, atom: NodeIndex) -> usize {
        self.pi_bond_count[atom.index()] as usize
    }

    /// Number of single-order bonds incident on `atom`.
    pub fn single_bond_count(&self, atom: NodeIndex) -> usize {
        self.single_bond_count[atom.index()] as usize
    }

    /// Highest order among the bonds of `atom`, `None` if the atom has
    /// no bonds of known order.
    pub fn max_bond_order(&self, atom: NodeIndex) -> Option<BondOrder> {
        self.max_bond_order[atom.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::element::Element;

    fn bond(order: BondOrder) -> Bond {
        Bond {
            order: Some(order),
            ..Bond::default()
        }
    }

    #[test]
    fn isolated_atom_defaults() {
        let mut mol = Mol::<Atom, Bond>::new();
        let c = mol.add_atom(Atom::from_element(Element::C));
        let cache = PropertyCache::build(&mol);
        assert_eq!(cache.neighbor_count(c), 0);
        assert_eq!(cache.pi_bond_count(c), 0);
        assert_eq!(cache.single_bond_count(c), 0);
        assert_eq!(cache.max_bond_order(c), None);
    }

    #[test]
    fn counts_both_endpoints() {
        let mut mol = Mol::<Atom, Bond>::new();
        let a = mol.add_atom(Atom::from_element(Element::C));
        let b = mol.add_atom(Atom::from_element(Element::C));
        mol.add_bond(a, b, bond(BondOrder::Double));
        let cache = PropertyCache::build(&mol);
        for idx in [a, b] {
            assert_eq!(cache.neighbor_count(idx), 1);
            assert_eq!(cache.pi_bond_count(idx), 1);
            assert_eq!(cache.single_bond_count(idx), 0);
            assert_eq!(cache.max_bond_order(idx), Some(BondOrder::Double));
        }
    }

    #[test]
    fn mixed_orders() {
        // propyne: C#C-C
        let mut mol = Mol::<Atom, Bond>::new();
        let a = mol.add_atom(Atom::from_element(Element::C));
        let b = mol.add_atom(Atom::from_element(Element::C));
        let c = mol.add_atom(Atom::from_element(Element::C));
        mol.add_bond(a, b, bond(BondOrder::Triple));
        mol.add_bond(b, c, bond(BondOrder::Single));
        let cache = PropertyCache::build(&mol);
        assert_eq!(cache.neighbor_count(b), 2);
        assert_eq!(cache.max_bond_order(b), Some(BondOrder::Triple));
        assert_eq!(cache.single_bond_count(b), 1);
        assert_eq!(cache.pi_bond_count(b), 0);
        assert_eq!(cache.max_bond_order(c), Some(BondOrder::Single));
    }

    #[test]
    fn unknown_order_counts_neighbor_only() {
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
        let cache = PropertyCache::build(&mol);
        assert_eq!(cache.neighbor_count(a), 1);
        assert_eq!(cache.single_bond_count(a), 0);
        assert_eq!(cache.pi_bond_count(a), 0);
        assert_eq!(cache.max_bond_order(a), None);
    }
}
