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
    pub(super) fn oxygen(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            self.oxygen_radical(atom, out);
            return;
        }
        let charged = predicates::is_charged(self.mol.atom(atom));
        if predicates::has_hybridization(self.mol.atom(atom)) && !charged {
            match self.hybridization(atom) {
                Some(Hybridization::SP2) => match self.neighbor_count(atom) {
                    1 => {
                        if predicates::is_carboxylate(self.mol, atom) {
                            out.push("O.sp2.co2");
                        } else {
                            out.push("O.sp2");
                        }
                    }
                    2 => out.push("O.planar3"),
                    _ => {}
                },
                Some(Hybridization::SP3) => out.push("O.sp3"),
                Some(Hybridization::PLANAR3) => out.push("O.planar3"),
                _ => {}
            }
        } else if charged {
            match self.charge(atom) {
                Some(-1) if self.neighbor_count(atom) <= 1 => {
                    if predicates::is_carboxylate(self.mol, atom) {
                        out.push("O.minus.co2");
                    } else {
                        out.push("O.minus");
                    }
                }
                Some(-2) if self.neighbor_count(atom) == 0 => out.push("O.minus2"),
                Some(1) => {
                    if self.neighbor_count(atom) == 0 {
                        out.push("O.plus");
                    }
                    match self.max_bond_order(atom) {
                        Some(BondOrder::Double) => out.push("O.plus.sp2"),
                        Some(BondOrder::Triple) => out.push("O.plus.sp1"),
                        _ => out.push("O.plus"),
                    }
                }
                _ => {}
            }
        } else if self.neighbor_count(atom) > 2 {
            // over-coordinated oxygen is not perceived
        } else if self.neighbor_count(atom) == 0 {
            out.push("O.sp3");
        } else {
            match self.max_bond_order(atom) {
                Some(BondOrder::Double) => {
                    if predicates::is_carboxylate(self.mol, atom) {
                        out.push("O.sp2.co2");
                    } else {
                        out.push("O.sp2");
                    }
                }
                Some(BondOrder::Single) => {
                    let heavy =
                        self.neighbor_count(atom) - self.explicit_hydrogen_count(atom);
                    if heavy == 2 {
                        // an sp3 oxygen embedded between two sp2 ring
                        // neighbors takes part in the aromatic system
                        if self.is_ring_atom(atom) && self.both_neighbors_sp2(atom) {
                            out.push("O.planar3");
                        }
                        out.push("O.sp3");
                    } else {
                        out.push("O.sp3");
                    }
                }
                _ => {}
            }
        }
    }

    fn oxygen_radical(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        match self.charge(atom) {
            Some(0) => {
                if self.neighbor_count(atom) <= 1 {
                    out.push("O.sp3.radical");
                }
            }
            Some(1) => {
                if self.neighbor_count(atom) == 0 {
                    out.push("O.plus.radical");
                } else if self.neighbor_count(atom) <= 2 {
                    match self.max_bond_order(atom) {
                        Some(BondOrder::Single) => out.push("O.plus.radical"),
                        Some(BondOrder::Double) => out.push("O.plus.sp2.radical"),
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }
}
