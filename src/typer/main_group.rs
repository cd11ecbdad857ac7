use petgraph::graph::NodeIndex;

use super::AtomTyper;
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
    pub(super) fn boron(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        let max = self.max_bond_order(atom);
        if self.charge(atom) == Some(-1)
            && max == Some(BondOrder::Single)
            && self.neighbor_count(atom) <= 4
        {
            out.push("B.minus");
        } else if self.charge(atom) == Some(3) && self.neighbor_count(atom) == 4 {
            out.push("B.3plus");
        } else if self.neighbor_count(atom) <= 3 {
            out.push("B");
        }
    }

    pub(super) fn aluminium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        let charge = self.charge(atom);
        if charge == Some(3) {
            if self.neighbor_count(atom) == 0 {
                out.push("Al.3plus");
            }
        } else if charge == Some(0) && self.neighbor_count(atom) == 3 {
            out.push("Al");
        } else if charge == Some(-3) && self.neighbor_count(atom) == 6 {
            out.push("Al.3minus");
        }
    }

    pub(super) fn gallium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if !predicates::is_charged(self.mol.atom(atom))
            && self.max_bond_order(atom) == Some(BondOrder::Single)
            && self.neighbor_count(atom) <= 3
        {
            out.push("Ga");
        } else if self.charge(atom) == Some(3) {
            out.push("Ga.3plus");
        }
    }

    pub(super) fn indium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        let charge = self.charge(atom);
        if charge == Some(0) && self.neighbor_count(atom) == 3 {
            out.push("In.3");
        } else if charge == Some(3) && self.neighbor_count(atom) == 0 {
            out.push("In.3plus");
        } else if charge == Some(0) && self.neighbor_count(atom) == 1 {
            out.push("In.1");
        } else {
            out.push("In");
        }
    }

    pub(super) fn thallium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        let charge = self.charge(atom);
        if charge == Some(1) && self.neighbor_count(atom) == 0 {
            out.push("Tl.plus");
        } else if charge == Some(0) && self.neighbor_count(atom) == 0 {
            out.push("Tl");
        } else if charge == Some(0) && self.neighbor_count(atom) == 1 {
            out.push("Tl.1");
        }
    }

    pub(super) fn silicon(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(0) {
            match self.neighbor_count(atom) {
                2 => out.push("Si.2"),
                3 => out.push("Si.3"),
                4 => out.push("Si.sp3"),
                _ => {}
            }
        } else if self.charge(atom) == Some(-2) {
            out.push("Si.2minus.6");
        }
    }

    pub(super) fn germanium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if !predicates::is_charged(self.mol.atom(atom))
            && self.max_bond_order(atom) == Some(BondOrder::Single)
            && self.neighbor_count(atom) <= 4
        {
            out.push("Ge");
        }
        if self.charge(atom) == Some(0) && self.neighbor_count(atom) == 3 {
            out.push("Ge.3");
        }
    }

    pub(super) fn tin(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(0) && self.neighbor_count(atom) <= 4 {
            out.push("Sn.sp3");
        }
    }

    pub(super) fn lead(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        let charge = self.charge(atom);
        if charge == Some(0) && self.neighbor_count(atom) == 0 {
            out.push("Pb.neutral");
        } else if charge == Some(2) && self.neighbor_count(atom) == 0 {
            out.push("Pb.2plus");
        } else if charge == Some(0) && self.neighbor_count(atom) == 1 {
            out.push("Pb.1");
        }
    }
}
