//! The perception engine: per-element decision procedures behind a
//! dispatcher, feeding candidates through the acceptance validator.
//!
//! One [`AtomTyper`] is bound to one molecule and one
//! [`PerceptionMode`]. Construction takes the single pass over all
//! bonds that fills the [`PropertyCache`]; ring analysis is deferred
//! until a rule first asks a ring question. The engine never mutates
//! the molecule.
//!
//! Each element procedure appends type identifiers to an ordered
//! candidate list; [`perceive`](AtomTyper::perceive) resolves each
//! against the catalog and returns the first candidate the validator
//! accepts. An exhausted list is an unperceived atom, not an error.

mod alkali;
mod carbon;
mod chalcogens;
mod halogens;
mod hydrogen;
mod main_group;
mod nitrogen;
mod noble;
mod oxygen;
mod pnictogens;
mod transition;

use std::cell::OnceCell;

use petgraph::graph::NodeIndex;

use crate::atom::Hybridization;
use crate::bond::BondOrder;
use crate::dictionary::{AtomTypeCatalog, AtomTypeDefinition, UnknownAtomType};
use crate::element::Element;
use crate::mol::Mol;
use crate::predicates;
use crate::properties::PropertyCache;
use crate::rings::CyclicFragments;
use crate::traits::{
    HasAmbiguousOrder, HasAromaticity, HasAtomicNum, HasBondAromaticity, HasBondOrder,
    HasFormalCharge, HasHybridization, HasImplicitHydrogens, HasPseudoFlag,
};
use crate::validate::{accepts, PerceptionMode};

/// Atom-type perception engine for a single molecule.
pub struct AtomTyper<'a, A, B> {
    mol: &'a Mol<A, B>,
    catalog: &'a AtomTypeCatalog,
    mode: PerceptionMode,
    props: PropertyCache,
    rings: OnceCell<CyclicFragments>,
}

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
    pub fn new(mol: &'a Mol<A, B>, catalog: &'a AtomTypeCatalog, mode: PerceptionMode) -> Self {
        Self {
            mol,
            catalog,
            mode,
            props: PropertyCache::build(mol),
            rings: OnceCell::new(),
        }
    }

    pub fn mode(&self) -> PerceptionMode {
        self.mode
    }

    /// Perceive the type of one atom.
    ///
    /// Returns `Ok(None)` when no candidate survives validation or the
    /// element has no decision procedure. Fails only when a procedure
    /// references an identifier missing from the catalog — a catalog
    /// configuration error, not a property of the molecule.
    pub fn perceive(
        &self,
        atom: NodeIndex,
    ) -> Result<Option<&'a AtomTypeDefinition>, UnknownAtomType> {
        if self.mol.atom(atom).is_pseudo() {
            // wildcard type, deliberately exempt from validation
            return self.catalog.lookup("X").map(Some);
        }
        let mut candidates = Vec::new();
        self.dispatch(atom, &mut candidates);
        for identifier in candidates {
            let def = self.catalog.lookup(identifier)?;
            if accepts(self.mol, atom, def, self.mode) {
                return Ok(Some(def));
            }
        }
        Ok(None)
    }

    /// Perceive every atom, in atom index order.
    pub fn perceive_all(
        &self,
    ) -> Result<Vec<Option<&'a AtomTypeDefinition>>, UnknownAtomType> {
        self.mol.atoms().map(|atom| self.perceive(atom)).collect()
    }

    /// The hybridization each atom's perceived type declares, in atom
    /// index order. This is the hand-off consumed by bond-order
    /// resolution of rings flagged single-or-double; apply it to the
    /// molecule if later pipeline stages expect it on the atoms.
    pub fn perceive_hybridizations(
        &self,
    ) -> Result<Vec<Option<Hybridization>>, UnknownAtomType> {
        Ok(self
            .perceive_all()?
            .into_iter()
            .map(|def| def.and_then(|d| d.hybridization))
            .collect())
    }

    /// Route to the element procedure: atomic number for the common
    /// elements, symbol for the long tail. Elements with no procedure
    /// contribute no candidates.
    fn dispatch(&self, atom: NodeIndex, out: &mut Vec<&'static str>) {
        match self.mol.atom(atom).atomic_num() {
            1 => self.hydrogen(atom, out),
            6 => self.carbon(atom, out),
            7 => self.nitrogen(atom, out),
            8 => self.oxygen(atom, out),
            9 => self.fluorine(atom, out),
            10 => self.noble(atom, out, "Ne"),
            11 => self.sodium(atom, out),
            12 => self.magnesium(atom, out),
            13 => self.aluminium(atom, out),
            14 => self.silicon(atom, out),
            15 => self.phosphorus(atom, out),
            16 => self.sulfur(atom, out),
            17 => self.chlorine(atom, out),
            18 => self.noble(atom, out, "Ar"),
            19 => self.potassium(atom, out),
            20 => self.calcium(atom, out),
            34 => self.selenium(atom, out),
            35 => self.bromine(atom, out),
            52 => self.tellurium(atom, out),
            53 => self.iodine(atom, out),
            84 => self.polonium(atom, out),
            n => {
                let symbol = match Element::from_atomic_num(n) {
                    Some(element) => element.symbol(),
                    None => return,
                };
                match symbol {
                    "He" => self.noble(atom, out, "He"),
                    "Kr" => self.noble(atom, out, "Kr"),
                    "Xe" => self.xenon(atom, out),
                    "Rn" => self.noble(atom, out, "Rn"),
                    "Li" => self.lithium(atom, out),
                    "Be" => self.beryllium(atom, out),
                    "Rb" => self.rubidium(atom, out),
                    "Sr" => self.strontium(atom, out),
                    "Ba" => self.barium(atom, out),
                    "Ra" => self.radium(atom, out),
                    "B" => self.boron(atom, out),
                    "Ga" => self.gallium(atom, out),
                    "In" => self.indium(atom, out),
                    "Tl" => self.thallium(atom, out),
                    "Ge" => self.germanium(atom, out),
                    "Sn" => self.tin(atom, out),
                    "Pb" => self.lead(atom, out),
                    "As" => self.arsenic(atom, out),
                    "Sb" => self.antimony(atom, out),
                    "Sc" => self.scandium(atom, out),
                    "Ti" => self.titanium(atom, out),
                    "V" => self.vanadium(atom, out),
                    "Cr" => self.chromium(atom, out),
                    "Mn" => self.manganese(atom, out),
                    "Fe" => self.iron(atom, out),
                    "Co" => self.cobalt(atom, out),
                    "Ni" => self.nickel(atom, out),
                    "Cu" => self.copper(atom, out),
                    "Zn" => self.zinc(atom, out),
                    "Mo" => self.molybdenum(atom, out),
                    "Ru" => self.ruthenium(atom, out),
                    "Ag" => self.silver(atom, out),
                    "Cd" => self.cadmium(atom, out),
                    "W" => self.tungsten(atom, out),
                    "Pt" => self.platinum(atom, out),
                    "Au" => self.gold(atom, out),
                    "Hg" => self.mercury(atom, out),
                    "Gd" => self.gadolinium(atom, out),
                    "Th" => self.thorium(atom, out),
                    "Pu" => self.plutonium(atom, out),
                    _ => {}
                }
            }
        }
    }

    // ----- shared accessors for the decision procedures -----

    fn charge(&self, atom: NodeIndex) -> Option<i8> {
        self.mol.atom(atom).formal_charge()
    }

    fn uncharged_or_unset(&self, atom: NodeIndex) -> bool {
        matches!(self.charge(atom), None | Some(0))
    }

    fn hybridization(&self, atom: NodeIndex) -> Option<Hybridization> {
        self.mol.atom(atom).hybridization()
    }

    fn implicit_hydrogens(&self, atom: NodeIndex) -> Option<u8> {
        self.mol.atom(atom).implicit_hydrogen_count()
    }

    fn neighbor_count(&self, atom: NodeIndex) -> usize {
        self.props.neighbor_count(atom)
    }

    fn max_bond_order(&self, atom: NodeIndex) -> Option<BondOrder> {
        self.props.max_bond_order(atom)
    }

    fn double_bond_count(&self, atom: NodeIndex) -> usize {
        self.props.pi_bond_count(atom)
    }

    fn double_bonds_to(&self, atom: NodeIndex, element: Element) -> usize {
        predicates::count_double_bonds_to(self.mol, atom, element)
    }

    fn has_radical(&self, atom: NodeIndex) -> bool {
        self.mol.has_single_electron(atom)
    }

    fn radical_count(&self, atom: NodeIndex) -> usize {
        self.mol.single_electron_count(atom)
    }

    fn both_neighbors_sp2(&self, atom: NodeIndex) -> bool {
        predicates::both_neighbors_are_sp2(self.mol, &self.props, atom)
    }

    fn rings(&self) -> &CyclicFragments {
        self.rings.get_or_init(|| CyclicFragments::find(self.mol))
    }

    fn is_ring_atom(&self, atom: NodeIndex) -> bool {
        self.rings().is_ring_atom(atom)
    }

    fn in_some_ring(&self, atom: NodeIndex) -> bool {
        self.rings().ring_containing(atom).is_some()
    }

    fn aromatic_bond_count(&self, atom: NodeIndex) -> usize {
        self.mol
            .bonds_of(atom)
            .filter(|&edge| self.mol.bond(edge).is_aromatic())
            .count()
    }

    fn explicit_hydrogen_count(&self, atom: NodeIndex) -> usize {
        predicates::count_explicit_hydrogens(self.mol, atom)
    }
}
