//! Metals are classified by charge and coordination count alone; no
//! hybridization or bond-order reasoning applies at this level of the
//! catalog, and metal radicals are not perceived.

use petgraph::graph::NodeIndex;

use super::AtomTyper;
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
    pub(super) fn scandium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.charge(atom) == Some(-3) && self.neighbor_count(atom) == 6 {
            out.push("Sc.3minus");
        }
    }

    pub(super) fn titanium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        let charge = self.charge(atom);
        if charge == Some(-3) && self.neighbor_count(atom) == 6 {
            out.push("Ti.3minus");
        } else if self.uncharged_or_unset(atom) && self.neighbor_count(atom) == 4 {
            out.push("Ti.sp3");
        } else if charge == Some(0) && self.neighbor_count(atom) == 2 {
            out.push("Ti.2");
        }
    }

    pub(super) fn vanadium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.charge(atom) == Some(-3) {
            match self.neighbor_count(atom) {
                6 => out.push("V.3minus"),
                4 => out.push("V.3minus.4"),
                _ => {}
            }
        }
    }

    pub(super) fn chromium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        let charge = self.charge(atom);
        if charge == Some(0) && self.neighbor_count(atom) == 6 {
            out.push("Cr");
        } else if charge == Some(0) && self.neighbor_count(atom) == 4 {
            out.push("Cr.4");
        } else if charge == Some(6) && self.neighbor_count(atom) == 0 {
            out.push("Cr.6plus");
        } else if charge == Some(0) && self.neighbor_count(atom) == 0 {
            out.push("Cr.neutral");
        } else if charge == Some(3) && self.neighbor_count(atom) == 0 {
            out.push("Cr.3plus");
        }
    }

    pub(super) fn manganese(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        match self.charge(atom) {
            Some(0) => match self.neighbor_count(atom) {
                2 => out.push("Mn.2"),
                0 => out.push("Mn.metallic"),
                _ => {}
            },
            Some(2) => out.push("Mn.2plus"),
            Some(3) => out.push("Mn.3plus"),
            _ => {}
        }
    }

    pub(super) fn iron(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        match self.charge(atom) {
            Some(0) => {
                out.push("Fe.metallic");
                match self.neighbor_count(atom) {
                    2 => out.push("Fe.2"),
                    3 => out.push("Fe.3"),
                    4 => out.push("Fe.4"),
                    5 => out.push("Fe.5"),
                    6 => out.push("Fe.6"),
                    _ => {}
                }
            }
            Some(2) => {
                if self.neighbor_count(atom) <= 1 {
                    out.push("Fe.2plus");
                }
            }
            Some(1) => {
                if self.neighbor_count(atom) == 2 {
                    out.push("Fe.plus");
                }
            }
            Some(3) => out.push("Fe.3plus"),
            Some(-2) => out.push("Fe.2minus"),
            Some(-3) => out.push("Fe.3minus"),
            Some(-4) => out.push("Fe.4minus"),
            _ => {}
        }
    }

    pub(super) fn cobalt(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        match self.charge(atom) {
            Some(2) => out.push("Co.2plus"),
            Some(3) => out.push("Co.3plus"),
            None | Some(0) => match self.neighbor_count(atom) {
                2 => out.push("Co.2"),
                4 => out.push("Co.4"),
                6 => out.push("Co.6"),
                1 => out.push("Co.1"),
                _ => out.push("Co.metallic"),
            },
            Some(1) => match self.neighbor_count(atom) {
                2 => out.push("Co.plus.2"),
                4 => out.push("Co.plus.4"),
                1 => out.push("Co.plus.1"),
                6 => out.push("Co.plus.6"),
                5 => out.push("Co.plus.5"),
                _ => out.push("Co.plus"),
            },
            _ => {}
        }
    }

    pub(super) fn nickel(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        let charge = self.charge(atom);
        if charge == Some(2) {
            out.push("Ni.2plus");
        } else if charge == Some(0) && self.neighbor_count(atom) == 2 {
            out.push("Ni");
        } else if charge == Some(0) && self.neighbor_count(atom) == 0 {
            out.push("Ni.metallic");
        } else if charge == Some(1) && self.neighbor_count(atom) == 1 {
            out.push("Ni.plus");
        }
    }

    pub(super) fn copper(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        match self.charge(atom) {
            Some(2) => out.push("Cu.2plus"),
            Some(0) => {
                if self.neighbor_count(atom) == 1 {
                    out.push("Cu.1");
                } else {
                    out.push("Cu.metallic");
                }
            }
            Some(1) => out.push("Cu.plus"),
            _ => {}
        }
    }

    pub(super) fn zinc(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        match (self.neighbor_count(atom), self.charge(atom)) {
            (0, Some(0)) => out.push("Zn.metallic"),
            (0, Some(2)) => out.push("Zn.2plus"),
            (1, Some(0)) => out.push("Zn.1"),
            (2, Some(0)) => out.push("Zn"),
            _ => {}
        }
    }

    pub(super) fn molybdenum(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.charge(atom) == Some(0) {
            if self.neighbor_count(atom) == 4 {
                out.push("Mo.4");
            }
            out.push("Mo.metallic");
        }
    }

    pub(super) fn ruthenium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        match self.charge(atom) {
            Some(0) => out.push("Ru.6"),
            Some(-2) => out.push("Ru.2minus.6"),
            Some(-3) => out.push("Ru.3minus.6"),
            _ => {}
        }
    }

    pub(super) fn silver(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        match self.charge(atom) {
            Some(0) => {
                if self.neighbor_count(atom) == 1 {
                    out.push("Ag.1");
                }
                out.push("Ag.neutral");
            }
            Some(1) => out.push("Ag.plus"),
            _ => {}
        }
    }

    pub(super) fn cadmium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        match self.charge(atom) {
            Some(2) => out.push("Cd.2plus"),
            Some(0) => match self.neighbor_count(atom) {
                0 => out.push("Cd.metallic"),
                2 => out.push("Cd.2"),
                _ => {}
            },
            _ => {}
        }
    }

    pub(super) fn tungsten(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.uncharged_or_unset(atom) {
            out.push("W.metallic");
        }
    }

    pub(super) fn platinum(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(2) {
            if self.neighbor_count(atom) == 4 {
                out.push("Pt.2plus.4");
            } else {
                out.push("Pt.2plus");
            }
        } else if self.uncharged_or_unset(atom) {
            match self.neighbor_count(atom) {
                2 => out.push("Pt.2"),
                4 => out.push("Pt.4"),
                6 => out.push("Pt.6"),
                _ => {}
            }
        }
    }

    pub(super) fn gold(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.charge(atom) == Some(0) && self.neighbor_count(atom) == 1 {
            out.push("Au.1");
        }
    }

    pub(super) fn mercury(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        match self.charge(atom) {
            Some(-1) => out.push("Hg.minus"),
            Some(2) => out.push("Hg.2plus"),
            Some(1) => {
                if self.neighbor_count(atom) <= 1 {
                    out.push("Hg.plus");
                }
            }
            Some(0) => match self.neighbor_count(atom) {
                2 => out.push("Hg.2"),
                1 => out.push("Hg.1"),
                0 => out.push("Hg.metallic"),
                _ => {}
            },
            _ => {}
        }
    }

    pub(super) fn gadolinium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.charge(atom) == Some(3) && self.neighbor_count(atom) == 0 {
            out.push("Gd.3plus");
        }
    }

    pub(super) fn thorium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.charge(atom) == Some(0) && self.neighbor_count(atom) == 0 {
            out.push("Th");
        }
    }

    pub(super) fn plutonium(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.charge(atom) == Some(0) && self.neighbor_count(atom) == 0 {
            out.push("Pu");
        }
    }
}
