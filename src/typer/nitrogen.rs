use petgraph::graph::NodeIndex;

use super::AtomTyper;
use crate::atom::Hybridization;
use crate::bond::BondOrder;
use crate::element::Element;
use crate::predicates;
use crate::traits::{
    HasAmbiguousOrder, HasAromaticity, HasAtomicNum, HasBondAromaticity, HasBondOrder,
    HasFormalCharge, HasHybridization, HasImplicitHydrogens, HasPseudoFlag,
};

impl<'a, A, B> AtomTyper<'a, A, B>
where
    A: HasAtomicNum
        + HasFormalCharge
        + HasImplicitHydrogens
        + HasHybridization
        + HasAromaticity
        + HasPseudoFlag,
    B: HasBondOrder + HasBondAromaticity + HasAmbiguousOrder,
{
    pub(super) fn nitrogen(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            self.nitrogen_radical(atom, out);
            return;
        }
        let charged = predicates::is_charged(self.mol.atom(atom));
        if predicates::has_hybridization(self.mol.atom(atom)) && !charged {
            match self.hybridization(atom) {
                Some(Hybridization::SP1) => {
                    if self.neighbor_count(atom) > 1 {
                        out.push("N.sp1.2");
                    } else {
                        out.push("N.sp1");
                    }
                }
                Some(Hybridization::SP2) => self.nitrogen_sp2(atom, out),
                Some(Hybridization::SP3) => out.push("N.sp3"),
                Some(Hybridization::PLANAR3) => {
                    if self.neighbor_count(atom) == 3
                        && self.max_bond_order(atom) == Some(BondOrder::Double)
                        && self.double_bonds_to(atom, Element::O) == 2
                    {
                        out.push("N.nitro");
                    }
                    out.push("N.planar3");
                }
                None => {}
            }
        } else if charged {
            self.nitrogen_charged(atom, out);
        } else if self.neighbor_count(atom) > 3 {
            if self.neighbor_count(atom) == 4 && self.double_bond_count(atom) == 1 {
                out.push("N.oxide");
            }
        } else if self.neighbor_count(atom) == 0 {
            out.push("N.sp3");
        } else if predicates::has_ambiguous_bond(self.mol, atom) {
            let connected =
                self.neighbor_count(atom) + self.implicit_hydrogens(atom).unwrap_or(0) as usize;
            if connected == 3 {
                out.push("N.planar3");
            }
            out.push("N.sp2");
        } else {
            match self.max_bond_order(atom) {
                Some(BondOrder::Single) => self.nitrogen_single_bonded(atom, out),
                Some(BondOrder::Double) => {
                    if self.neighbor_count(atom) == 3
                        && self.double_bonds_to(atom, Element::O) == 2
                    {
                        out.push("N.nitro");
                    } else if self.neighbor_count(atom) == 3 && self.double_bond_count(atom) > 0 {
                        out.push("N.sp2.3");
                    }
                    out.push("N.sp2");
                }
                Some(BondOrder::Triple) => {
                    if self.neighbor_count(atom) > 1 {
                        out.push("N.sp1.2");
                    } else {
                        out.push("N.sp1");
                    }
                }
                _ => {}
            }
        }
    }

    /// Declared-sp2 nitrogen: amide patterns first, then the
    /// pyrrole/pyridine split for ring members, N.sp2 as the fallback.
    fn nitrogen_sp2(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if predicates::is_amide(self.mol, atom) {
            out.push("N.amide");
        } else if predicates::is_thioamide(self.mol, atom) {
            out.push("N.thioamide");
        }
        let neighbors = self.neighbor_count(atom);
        if neighbors == 4 && self.max_bond_order(atom) == Some(BondOrder::Double) {
            out.push("N.oxide");
        } else if neighbors > 1 && self.both_neighbors_sp2(atom) && self.in_some_ring(atom) {
            if neighbors == 3 {
                match self.max_bond_order(atom) {
                    Some(BondOrder::Double) => out.push("N.sp2.3"),
                    Some(BondOrder::Single) => out.push("N.planar3"),
                    _ => {}
                }
            } else if neighbors == 2 {
                match self.max_bond_order(atom) {
                    Some(BondOrder::Single) => {
                        if self.implicit_hydrogens(atom) == Some(1) {
                            out.push("N.planar3");
                        } else {
                            out.push("N.sp2");
                        }
                    }
                    Some(BondOrder::Double) => out.push("N.sp2"),
                    _ => {}
                }
            }
        }
        out.push("N.sp2");
    }

    fn nitrogen_charged(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        match self.charge(atom) {
            Some(1) => {
                let max = self.max_bond_order(atom);
                if max == Some(BondOrder::Single) || self.neighbor_count(atom) == 0 {
                    if self.hybridization(atom) == Some(Hybridization::SP2) {
                        out.push("N.plus.sp2");
                    }
                    out.push("N.plus");
                } else if max == Some(BondOrder::Double) {
                    match self.double_bond_count(atom) {
                        1 => out.push("N.plus.sp2"),
                        2 => out.push("N.plus.sp1"),
                        _ => {}
                    }
                } else if max == Some(BondOrder::Triple) && self.neighbor_count(atom) == 2 {
                    out.push("N.plus.sp1");
                }
            }
            Some(-1) => match self.max_bond_order(atom) {
                Some(BondOrder::Single) => {
                    if self.neighbor_count(atom) >= 2
                        && self.both_neighbors_sp2(atom)
                        && self.is_ring_atom(atom)
                    {
                        out.push("N.minus.planar3");
                    } else if self.neighbor_count(atom) <= 2 {
                        out.push("N.minus.sp3");
                    }
                }
                Some(BondOrder::Double) => {
                    if self.neighbor_count(atom) <= 1 {
                        out.push("N.minus.sp2");
                    }
                }
                _ => {}
            },
            _ => {}
        }
    }

    /// Uncharged nitrogen whose bonds are all single-order. The dense
    /// case: amides, aromatic two-coordinate nitrogens, and the
    /// planar-vs-pyramidal split for ring members.
    fn nitrogen_single_bonded(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if predicates::is_amide(self.mol, atom) {
            out.push("N.amide");
        } else if predicates::is_thioamide(self.mol, atom) {
            out.push("N.thioamide");
        }
        let heavy = self.neighbor_count(atom) - self.explicit_hydrogen_count(atom);
        if heavy == 2 {
            if self.aromatic_bond_count(atom) >= 2 {
                match self.implicit_hydrogens(atom) {
                    None | Some(0) => {
                        // no N-H: pyrrole-type only when it is the lone
                        // heteroatom of its aromatic neighborhood
                        if predicates::is_single_hetero_atom(self.mol, atom) {
                            out.push("N.planar3");
                        } else {
                            out.push("N.sp2");
                        }
                    }
                    Some(1) => out.push("N.planar3"),
                    _ => {}
                }
            } else if self.both_neighbors_sp2(atom) && self.is_ring_atom(atom) {
                // an N.sp3 expected to take part in an aromatic system
                out.push("N.planar3");
            } else {
                out.push("N.sp3");
            }
        } else if heavy == 3 {
            if self.both_neighbors_sp2(atom) && self.is_ring_atom(atom) {
                out.push("N.planar3");
            }
            out.push("N.sp3");
        } else {
            out.push("N.sp3");
        }
    }

    fn nitrogen_radical(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        let neighbors = self.neighbor_count(atom);
        if (1..=2).contains(&neighbors) {
            match self.charge(atom) {
                Some(1) => match self.max_bond_order(atom) {
                    Some(BondOrder::Double) => out.push("N.plus.sp2.radical"),
                    Some(BondOrder::Single) => out.push("N.plus.sp3.radical"),
                    _ => {}
                },
                None | Some(0) => match self.max_bond_order(atom) {
                    Some(BondOrder::Single) => out.push("N.sp3.radical"),
                    Some(BondOrder::Double) => out.push("N.sp2.radical"),
                    _ => {}
                },
                _ => {}
            }
        } else if self.charge(atom) == Some(1)
            && self.max_bond_order(atom) == Some(BondOrder::Single)
        {
            out.push("N.plus.sp3.radical");
        }
    }
}
