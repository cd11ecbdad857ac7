//! Cyclic-fragment analysis over a spanning forest.
//!
//! A breadth-first spanning forest is built over the molecular graph;
//! every bond left out of the forest closes exactly one fundamental
//! cycle with the tree paths to its endpoints. The union of those
//! cycles covers every atom that lies on any cycle, which is all the
//! ring information atom typing needs: an O(1) "is this a ring atom"
//! probe plus some ring containing a given atom.

use std::collections::VecDeque;

use petgraph::graph::NodeIndex;

use crate::mol::Mol;

#[derive(Debug, Clone)]
pub struct CyclicFragments {
    in_cycle: Vec<bool>,
    cycles: Vec<Vec<NodeIndex>>,
}

impl CyclicFragments {
    pub fn find<A, B>(mol: &Mol<A, B>) -> Self {
        let n = mol.atom_count();
        let mut visited = vec![false; n];
        let mut parent: Vec<Option<NodeIndex>> = vec![None; n];
        let mut depth = vec![0u32; n];
        let mut tree_edge = vec![false; mol.bond_count()];

        for root in mol.atoms() {
            if visited[root.index()] {
                continue;
            }
            visited[root.index()] = true;
            let mut queue = VecDeque::from([root]);
            while let Some(cur) = queue.pop_front() {
                for edge in mol.bonds_of(cur) {
                    let nb = match mol.bond_other_end(edge, cur) {
                        Some(nb) => nb,
                        None => continue,
                    };
                    if !visited[nb.index()] {
                        visited[nb.index()] = true;
                        parent[nb.index()] = Some(cur);
                        depth[nb.index()] = depth[cur.index()] + 1;
                        tree_edge[edge.index()] = true;
                        queue.push_back(nb);
                    }
                }
            }
        }

        // Every remaining bond closes a cycle through the forest.
        // Enumeration in bond index order keeps the cycle list, and
        // therefore ring_containing, deterministic for a fixed molecule.
        let mut cycles: Vec<Vec<NodeIndex>> = Vec::new();
        let mut in_cycle = vec![false; n];
        for edge in mol.bonds() {
            if tree_edge[edge.index()] {
                continue;
            }
            let (u, v) = match mol.bond_endpoints(edge) {
                Some(pair) => pair,
                None => continue,
            };
            if u == v {
                continue;
            }

            let mut path_u = vec![u];
            let mut path_v = vec![v];
            let mut pu = u;
            let mut pv = v;
            while depth[pu.index()] > depth[pv.index()] {
                pu = parent[pu.index()].unwrap();
                path_u.push(pu);
            }
            while depth[pv.index()] > depth[pu.index()] {
                pv = parent[pv.index()].unwrap();
                path_v.push(pv);
            }
            while pu != pv {
                pu = parent[pu.index()].unwrap();
                path_u.push(pu);
                pv = parent[pv.index()].unwrap();
                path_v.push(pv);
            }

            // path_u and path_v both end at the meeting point; splice
            // them into one cycle without repeating it.
            let mut cycle = path_u;
            for &node in path_v[..path_v.len() - 1].iter().rev() {
                cycle.push(node);
            }
            for &node in &cycle {
                in_cycle[node.index()] = true;
            }
            cycles.push(cycle);
        }

        Self { in_cycle, cycles }
    }

    /// Whether `atom` lies on at least one cycle.
    pub fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        self.in_cycle[atom.index()]
    }

    /// Some cycle containing `atom`: the first one in enumeration
    /// order, or `None` for acyclic atoms. Which cycle is returned for
    /// atoms in fused systems is deterministic but otherwise
    /// unspecified.
    pub fn ring_containing(&self, atom: NodeIndex) -> Option<&[NodeIndex]> {
        self.cycles
            .iter()
            .find(|cycle| cycle.contains(&atom))
            .map(|cycle| cycle.as_slice())
    }

    pub fn cycles(&self) -> &[Vec<NodeIndex>] {
        &self.cycles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::Atom;
    use crate::bond::Bond;
    use crate::element::Element;

    fn carbon_ring(size: usize) -> (Mol<Atom, Bond>, Vec<NodeIndex>) {
        let mut mol = Mol::new();
        let idxs: Vec<_> = (0..size)
            .map(|_| mol.add_atom(Atom::from_element(Element::C)))
            .collect();
        for i in 0..size {
            mol.add_bond(idxs[i], idxs[(i + 1) % size], Bond::default());
        }
        (mol, idxs)
    }

    fn carbon_chain(len: usize) -> (Mol<Atom, Bond>, Vec<NodeIndex>) {
        let mut mol = Mol::new();
        let idxs: Vec<_> = (0..len)
            .map(|_| mol.add_atom(Atom::from_element(Element::C)))
            .collect();
        for i in 1..len {
            mol.add_bond(idxs[i - 1], idxs[i], Bond::default());
        }
        (mol, idxs)
    }

    #[test]
    fn six_ring_all_cyclic() {
        let (mol, idxs) = carbon_ring(6);
        let cf = CyclicFragments::find(&mol);
        assert_eq!(cf.cycles().len(), 1);
        for idx in idxs {
            assert!(cf.is_ring_atom(idx));
            assert_eq!(cf.ring_containing(idx).unwrap().len(), 6);
        }
    }

    #[test]
    fn chain_has_no_cycles() {
        let (mol, idxs) = carbon_chain(5);
        let cf = CyclicFragments::find(&mol);
        assert_eq!(cf.cycles().len(), 0);
        for idx in idxs {
            assert!(!cf.is_ring_atom(idx));
            assert!(cf.ring_containing(idx).is_none());
        }
    }

    #[test]
    fn substituent_outside_ring() {
        // methylcyclohexane-like skeleton
        let (mut mol, idxs) = carbon_ring(6);
        let methyl = mol.add_atom(Atom::from_element(Element::C));
        mol.add_bond(idxs[0], methyl, Bond::default());
        let cf = CyclicFragments::find(&mol);
        assert!(cf.is_ring_atom(idxs[0]));
        assert!(!cf.is_ring_atom(methyl));
    }

    #[test]
    fn fused_rings_share_atoms() {
        // two fused six-rings (decalin skeleton): 10 atoms, 11 bonds
        let mut mol = Mol::<Atom, Bond>::new();
        let idxs: Vec<_> = (0..10)
            .map(|_| mol.add_atom(Atom::from_element(Element::C)))
            .collect();
        for i in 0..9 {
            mol.add_bond(idxs[i], idxs[i + 1], Bond::default());
        }
        mol.add_bond(idxs[9], idxs[0], Bond::default());
        mol.add_bond(idxs[0], idxs[5], Bond::default());
        let cf = CyclicFragments::find(&mol);
        assert_eq!(cf.cycles().len(), 2);
        for idx in idxs {
            assert!(cf.is_ring_atom(idx));
        }
    }

    #[test]
    fn two_components() {
        let mut mol = Mol::<Atom, Bond>::new();
        let ring: Vec<_> = (0..3)
            .map(|_| mol.add_atom(Atom::from_element(Element::C)))
            .collect();
        for i in 0..3 {
            mol.add_bond(ring[i], ring[(i + 1) % 3], Bond::default());
        }
        let lone = mol.add_atom(Atom::from_element(Element::C));
        let cf = CyclicFragments::find(&mol);
        assert_eq!(cf.cycles().len(), 1);
        assert!(cf.is_ring_atom(ring[0]));
        assert!(!cf.is_ring_atom(lone));
    }

    #[test]
    fn deterministic_for_fixed_molecule() {
        let (mut mol, idxs) = carbon_ring(6);
        mol.add_bond(idxs[0], idxs[3], Bond::default());
        let a = CyclicFragments::find(&mol);
        let b = CyclicFragments::find(&mol);
        assert_eq!(a.cycles(), b.cycles());
    }
}
