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
    pub(super) fn lithium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        match self.neighbor_count(atom) {
            1 => {
                if self.uncharged_or_unset(atom) {
                    out.push("Li");
                }
            }
            0 => {
                if self.uncharged_or_unset(atom) {
                    out.push("Li.neutral");
                }
                if matches!(self.charge(atom), None | Some(1)) {
                    out.push("Li.plus");
                }
            }
            _ => {}
        }
    }

    pub(super) fn sodium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(1) {
            out.push("Na.plus");
        } else if self.uncharged_or_unset(atom) && self.neighbor_count(atom) == 1 {
            out.push("Na");
        } else if self.charge(atom) == Some(0) && self.neighbor_count(atom) == 0 {
            out.push("Na.neutral");
        }
    }

    pub(super) fn potassium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(1) {
            out.push("K.plus");
        } else if self.uncharged_or_unset(atom) {
            if self.neighbor_count(atom) == 1 {
                out.push("K.neutral");
            }
            out.push("K.metallic");
        }
    }

    pub(super) fn rubidium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(1) {
            out.push("Rb.plus");
        } else if self.charge(atom) == Some(0) {
            out.push("Rb.neutral");
        }
    }

    pub(super) fn beryllium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.charge(atom) == Some(-2)
            && self.max_bond_order(atom) == Some(BondOrder::Single)
            && self.neighbor_count(atom) <= 4
        {
            out.push("Be.2minus");
        } else if self.charge(atom) == Some(0) && self.neighbor_count(atom) == 0 {
            out.push("Be.neutral");
        }
    }

    pub(super) fn magnesium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(0) {
            match self.neighbor_count(atom) {
                4 => out.push("Mg.neutral"),
                2 => out.push("Mg.neutral.2"),
                1 => out.push("Mg.neutral.1"),
                _ => out.push("Mg.neutral"),
            }
        } else if self.charge(atom) == Some(2) {
            out.push("Mg.2plus");
        }
    }

    pub(super) fn calcium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        let charge = self.charge(atom);
        if charge == Some(2) && self.neighbor_count(atom) == 0 {
            out.push("Ca.2plus");
        } else if charge == Some(0) && self.neighbor_count(atom) == 2 {
            out.push("Ca.2");
        } else if charge == Some(0) && self.neighbor_count(atom) == 1 {
            out.push("Ca.1");
        }
    }

    pub(super) fn strontium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(2) {
            out.push("Sr.2plus");
        }
    }

    pub(super) fn barium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(2) {
            out.push("Ba.2plus");
        }
    }

    pub(super) fn radium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(0) {
            out.push("Ra.neutral");
        }
    }
}
