use petgraph::graph::NodeIndex;

use super::AtomTyper;
use crate::atom::Hybridization;
use crate::bond::BondOrder;
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
    pub(super) fn carbon(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            self.carbon_radical(atom, out);
            return;
        }
        let charged = predicates::is_charged(self.mol.atom(atom));
        if predicates::has_hybridization(self.mol.atom(atom)) && !charged {
            // trust the declared hybridization over bond-order inference
            match self.hybridization(atom) {
                Some(Hybridization::SP2) => out.push("C.sp2"),
                Some(Hybridization::SP3) => out.push("C.sp3"),
                Some(Hybridization::SP1) => {
                    if self.max_bond_order(atom) == Some(BondOrder::Triple) {
                        out.push("C.sp");
                    } else {
                        out.push("C.allene");
                    }
                }
                _ => {}
            }
        } else if self.mol.atom(atom).is_aromatic() {
            out.push("C.sp2");
        } else if predicates::has_ambiguous_bond(self.mol, atom) {
            out.push("C.sp2");
        } else if charged {
            match self.charge(atom) {
                Some(1) => {
                    if self.neighbor_count(atom) == 0 {
                        out.push("C.plus.sp2");
                    } else {
                        match self.max_bond_order(atom) {
                            Some(BondOrder::Triple) => out.push("C.plus.sp1"),
                            Some(BondOrder::Double) => out.push("C.plus.sp2"),
                            Some(BondOrder::Single) => out.push("C.plus.planar"),
                            _ => {}
                        }
                    }
                }
                Some(-1) => {
                    let max = self.max_bond_order(atom);
                    let neighbors = self.neighbor_count(atom);
                    if max == Some(BondOrder::Single) && neighbors <= 3 {
                        if self.is_ring_atom(atom) && self.both_neighbors_sp2(atom) {
                            out.push("C.minus.planar");
                        }
                        out.push("C.minus.sp3");
                    } else if max == Some(BondOrder::Double) && neighbors <= 3 {
                        out.push("C.minus.sp2");
                    } else if max == Some(BondOrder::Triple) && neighbors <= 1 {
                        out.push("C.minus.sp1");
                    }
                }
                _ => {}
            }
        } else if self.neighbor_count(atom) > 4 {
            // more than four connections is not perceived
        } else {
            match self.max_bond_order(atom) {
                Some(BondOrder::Quadruple) => {
                    // neither is a quadruple bond
                }
                Some(BondOrder::Triple) => out.push("C.sp"),
                Some(BondOrder::Double) => match self.double_bond_count(atom) {
                    2 => out.push("C.allene"),
                    1 => out.push("C.sp2"),
                    _ => {}
                },
                _ => {
                    if predicates::has_aromatic_bond(self.mol, atom) {
                        out.push("C.sp2");
                    }
                    out.push("C.sp3");
                }
            }
        }
    }

    fn carbon_radical(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.neighbor_count(atom) == 0 {
            out.push("C.radical.planar");
        } else if self.neighbor_count(atom) <= 3 {
            match self.max_bond_order(atom) {
                Some(BondOrder::Single) => out.push("C.radical.planar"),
                Some(BondOrder::Double) => out.push("C.radical.sp2"),
                Some(BondOrder::Triple) => out.push("C.radical.sp1"),
                _ => {}
            }
        }
    }
}
