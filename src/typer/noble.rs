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
    /// He, Ne, Ar, Kr and Rn share one rule: a neutral (or
    /// charge-unset) atom is the element itself.
    pub(super) fn noble(&self, atom: NodeIndex, out: &mut Vec<&'static str>, id: &'static str) {
        if self.has_radical(atom) {
            return;
        }
        if self.uncharged_or_unset(atom) {
            out.push(id);
        }
    }

    /// Xenon additionally has a bonded form (fluorides and the like).
    pub(super) fn xenon(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        if self.has_radical(atom) {
            return;
        }
        if self.uncharged_or_unset(atom) {
            if self.neighbor_count(atom) == 0 {
                out.push("Xe");
            } else {
                out.push("Xe.3");
            }
        }
    }
}
