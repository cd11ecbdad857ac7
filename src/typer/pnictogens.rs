use petgraph::graph::NodeIndex;

use super::AtomTyper;
use crate::bond::BondOrder;
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
    pub(super) fn phosphorus(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.radical_count(atom) == 3 {
            // three unpaired electrons: atomic phosphorus
            out.push("P.se.3");
            return;
        }
        if self.has_radical(atom) {
            return;
        }
        let charge = self.charge(atom);
        match self.neighbor_count(atom) {
            0 => {
                if self.uncharged_or_unset(atom) {
                    out.push("P.ine");
                }
            }
            1 => {
                if self.uncharged_or_unset(atom) {
                    out.push("P.ide");
                }
            }
            3 => {
                if charge == Some(1) {
                    out.push("P.anium");
                } else if self.double_bond_count(atom) == 1 {
                    out.push("P.ate");
                } else {
                    out.push("P.ine");
                }
            }
            2 => match self.max_bond_order(atom) {
                Some(BondOrder::Double) => {
                    if charge == Some(1) {
                        out.push("P.sp1.plus");
                    } else {
                        out.push("P.irane");
                    }
                }
                Some(BondOrder::Single) => out.push("P.ine"),
                _ => {}
            },
            4 => {
                if charge == Some(1) && self.double_bond_count(atom) == 0 {
                    out.push("P.ate.charged");
                } else if self.double_bond_count(atom) == 1 {
                    out.push("P.ate");
                }
            }
            5 => {
                if self.uncharged_or_unset(atom) {
                    out.push("P.ane");
                }
            }
            _ => {}
        }
    }

    pub(super) fn arsenic(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        let charge = self.charge(atom);
        if charge == Some(1) && self.neighbor_count(atom) <= 4 {
            out.push("As.plus");
        } else if charge == Some(0) {
            if self.neighbor_count(atom) == 4 {
                out.push("As.5");
            }
            if self.neighbor_count(atom) == 2 {
                out.push("As.2");
            }
            out.push("As");
        } else if charge == Some(3) {
            out.push("As.3plus");
        } else if charge == Some(-1) {
            out.push("As.minus");
        }
    }

    pub(super) fn antimony(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(0) {
            match self.neighbor_count(atom) {
                3 => out.push("Sb.3"),
                4 => out.push("Sb.4"),
                _ => {}
            }
        }
    }
}
