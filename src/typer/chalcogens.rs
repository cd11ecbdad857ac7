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
    pub(super) fn sulfur(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            // sulfur radicals are not perceived
            return;
        }
        let neighbors = self.neighbor_count(atom);
        let max = self.max_bond_order(atom);
        if self.hybridization(atom) == Some(Hybridization::SP2) && self.charge(atom) == Some(1) {
            if neighbors == 3 {
                out.push("S.inyl.charged");
            } else {
                out.push("S.plus");
            }
        } else if predicates::is_charged(self.mol.atom(atom)) {
            match (self.charge(atom), neighbors) {
                (Some(-1), 1) => out.push("S.minus"),
                (Some(1), 2) => out.push("S.plus"),
                (Some(1), 3) => out.push("S.inyl.charged"),
                (Some(2), 4) => out.push("S.onyl.charged"),
                (Some(-2), 0) => out.push("S.2minus"),
                _ => {}
            }
        } else if neighbors == 0 {
            if self.charge(atom) == Some(0) {
                out.push("S.3");
            }
        } else if neighbors == 1 {
            match max {
                Some(BondOrder::Double) => out.push("S.2"),
                Some(BondOrder::Single) => out.push("S.3"),
                _ => {}
            }
        } else if neighbors == 2 {
            if self.is_ring_atom(atom) && self.both_neighbors_sp2(atom) {
                if self.double_bond_count(atom) == 2 {
                    out.push("S.inyl.2");
                } else {
                    out.push("S.planar3");
                }
            } else if self.double_bonds_to(atom, Element::O) == 2 {
                out.push("S.oxide");
            } else if self.double_bond_count(atom) == 2 {
                out.push("S.inyl.2");
            } else if self.double_bond_count(atom) <= 1 {
                out.push("S.3");
            }
        } else if neighbors == 3 {
            match self.double_bond_count(atom) {
                1 => out.push("S.inyl"),
                3 => out.push("S.trioxide"),
                0 => out.push("S.anyl"),
                _ => {}
            }
        } else if neighbors == 4 {
            let double_o = self.double_bonds_to(atom, Element::O);
            let double_n = self.double_bonds_to(atom, Element::N);
            let double_s = self.double_bonds_to(atom, Element::S);
            if double_o + double_n == 2 {
                out.push("S.onyl");
            } else if double_s == 1 && double_o == 1 {
                out.push("S.thionyl");
            } else if max == Some(BondOrder::Single) {
                out.push("S.anyl");
            } else if double_o == 1 {
                out.push("S.sp3d1");
            } else if self.double_bond_count(atom) == 2 && max == Some(BondOrder::Double) {
                out.push("S.sp3.4");
            }
        } else if neighbors == 5 {
            match max {
                Some(BondOrder::Double) => out.push("S.sp3d1"),
                Some(BondOrder::Single) => out.push("S.octahedral"),
                _ => {}
            }
        } else if neighbors == 6 && max == Some(BondOrder::Single) {
            out.push("S.octahedral");
        }
    }

    pub(super) fn selenium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        let doubles = self.double_bond_count(atom);
        match (self.charge(atom), self.neighbor_count(atom)) {
            (Some(0), 0) => {
                if self.implicit_hydrogens(atom) == Some(0) {
                    out.push("Se.2");
                } else {
                    out.push("Se.3");
                }
            }
            (Some(0), 1) => {
                if doubles == 1 {
                    out.push("Se.1");
                } else if doubles == 0 {
                    out.push("Se.3");
                }
            }
            (Some(0), 2) => {
                if doubles == 0 {
                    out.push("Se.3");
                } else if doubles == 2 {
                    out.push("Se.sp2.2");
                }
            }
            (Some(0), 3) => out.push("Se.sp3.3"),
            (Some(0), 4) => {
                if doubles == 2 {
                    out.push("Se.sp3.4");
                } else if doubles == 0 {
                    out.push("Se.sp3d1.4");
                }
            }
            (Some(0), 5) => out.push("Se.5"),
            (Some(4), 0) => out.push("Se.4plus"),
            (Some(1), 3) => out.push("Se.plus.3"),
            (Some(-2), 0) => out.push("Se.2minus"),
            _ => {}
        }
    }

    pub(super) fn tellurium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if !predicates::is_charged(self.mol.atom(atom))
            && self.max_bond_order(atom) == Some(BondOrder::Single)
            && self.neighbor_count(atom) <= 2
        {
            out.push("Te.3");
        } else if self.charge(atom) == Some(4) && self.neighbor_count(atom) == 0 {
            out.push("Te.4plus");
        }
    }

    pub(super) fn polonium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.neighbor_count(atom) == 2 {
            out.push("Po");
        }
    }
}
