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
    pub(super) fn hydrogen(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            if self.uncharged_or_unset(atom) && self.neighbor_count(atom) == 0 {
                out.push("H.radical");
            }
            return;
        }
        match self.neighbor_count(atom) {
            2 => {
                // bridging hydrogen (diborane-like) is not perceived
            }
            1 => {
                if self.uncharged_or_unset(atom) {
                    out.push("H");
                }
            }
            0 => {
                if self.uncharged_or_unset(atom) {
                    out.push("H");
                } else if self.charge(atom) == Some(1) {
                    out.push("H.plus");
                } else if self.charge(atom) == Some(-1) {
                    out.push("H.minus");
                }
            }
            _ => {}
        }
    }
}
