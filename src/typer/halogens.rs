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
    pub(super) fn fluorine(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            self.halogen_radical(atom, out, "F.radical", "F.plus.radical");
            return;
        }
        if predicates::is_charged(self.mol.atom(atom)) {
            match self.charge(atom) {
                Some(-1) => out.push("F.minus"),
                Some(1) => match self.max_bond_order(atom) {
                    Some(BondOrder::Double) => out.push("F.plus.sp2"),
                    Some(BondOrder::Single) => out.push("F.plus.sp3"),
                    _ => {}
                },
                _ => {}
            }
        } else if self.neighbor_count(atom) <= 1 {
            out.push("F");
        }
    }

    pub(super) fn chlorine(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            match self.neighbor_count(atom) {
                0 => {
                    if self.uncharged_or_unset(atom) {
                        out.push("Cl.radical");
                    }
                }
                1 => {
                    if self.max_bond_order(atom) == Some(BondOrder::Single) {
                        out.push("Cl.plus.radical");
                    }
                }
                _ => {
                    if self.charge(atom) == Some(1) {
                        out.push("Cl.plus.radical");
                    }
                }
            }
            return;
        }
        if self.uncharged_or_unset(atom) {
            if self.max_bond_order(atom) == Some(BondOrder::Double) {
                match self.neighbor_count(atom) {
                    2 => out.push("Cl.2"),
                    3 => out.push("Cl.chlorate"),
                    4 => out.push("Cl.perchlorate"),
                    _ => {}
                }
            } else if self.neighbor_count(atom) <= 1 {
                out.push("Cl");
            }
        } else if self.charge(atom) == Some(-1) {
            out.push("Cl.minus");
        } else if self.charge(atom) == Some(1) {
            match self.max_bond_order(atom) {
                Some(BondOrder::Double) => out.push("Cl.plus.sp2"),
                Some(BondOrder::Single) => out.push("Cl.plus.sp3"),
                _ => {}
            }
        } else if self.charge(atom) == Some(3) && self.neighbor_count(atom) == 4 {
            out.push("Cl.perchlorate.charged");
        } else {
            let doubles = self.double_bond_count(atom);
            if self.neighbor_count(atom) == 3 && doubles == 2 {
                out.push("Cl.chlorate");
            } else if self.neighbor_count(atom) == 4 && doubles == 3 {
                out.push("Cl.perchlorate");
            }
        }
    }

    pub(super) fn bromine(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            self.halogen_radical(atom, out, "Br.radical", "Br.plus.radical");
            return;
        }
        if self.charge(atom) == Some(-1) {
            out.push("Br.minus");
        } else if self.charge(atom) == Some(1) {
            match self.max_bond_order(atom) {
                Some(BondOrder::Double) => out.push("Br.plus.sp2"),
                Some(BondOrder::Single) => out.push("Br.plus.sp3"),
                _ => {}
            }
        } else if self.neighbor_count(atom) <= 1 {
            out.push("Br");
        } else if self.neighbor_count(atom) == 3 {
            out.push("Br.3");
        }
    }

    pub(super) fn iodine(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            self.halogen_radical(atom, out, "I.radical", "I.plus.radical");
            return;
        }
        if predicates::is_charged(self.mol.atom(atom)) {
            match self.charge(atom) {
                Some(-1) => {
                    if self.neighbor_count(atom) == 0 {
                        out.push("I.minus");
                    } else {
                        out.push("I.minus.5");
                    }
                }
                Some(1) => match self.max_bond_order(atom) {
                    Some(BondOrder::Double) => out.push("I.plus.sp2"),
                    Some(BondOrder::Single) => out.push("I.plus.sp3"),
                    _ => {}
                },
                _ => {}
            }
        } else if self.neighbor_count(atom) == 3 {
            if self.double_bond_count(atom) == 2 {
                out.push("I.5");
            } else if self.charge(atom) == Some(0) {
                out.push("I.sp3d2.3");
            }
        } else if self.neighbor_count(atom) == 2 {
            if self.max_bond_order(atom) == Some(BondOrder::Double) {
                out.push("I.3");
            }
        } else if self.neighbor_count(atom) <= 1 {
            out.push("I");
        }
    }

    /// The shared F/Br/I radical pattern: a bare atom is the neutral or
    /// charged halogen radical, a singly bonded one only the charged
    /// form.
    fn halogen_radical(
        &self,
        atom: NodeIndex,
        out: &mut Vec<&'static str>,
        neutral: &'static str,
        charged: &'static str,
    ) {
        if self.neighbor_count(atom) == 0 {
            if self.charge(atom) == Some(1) {
                out.push(charged);
            } else if self.uncharged_or_unset(atom) {
                out.push(neutral);
            }
        } else if self.neighbor_count(atom) <= 1
            && self.max_bond_order(atom) == Some(BondOrder::Single)
        {
            out.push(charged);
        }
    }
}
