//! The atom-type dictionary: named bundles of structural constraints.
//!
//! Every perceived type is validated against its dictionary entry, so
//! the catalog is the other half of the decision procedures. A catalog
//! is plain read-only data injected into the
//! [`AtomTyper`](crate::AtomTyper); the built-in one covers every
//! identifier the element procedures can produce, and callers with
//! their own type scheme can construct a catalog from scratch.

use std::collections::HashMap;
use std::fmt;

use crate::atom::Hybridization;
use crate::bond::BondOrder;

/// Declared constraints of a named atom type.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomTypeDefinition {
    /// Dictionary key, e.g. `"C.sp3"` or `"O.minus.co2"`.
    pub identifier: String,
    /// Atomic number of the element this type describes; `0` for the
    /// pseudo-atom wildcard.
    pub atomic_num: u8,
    /// Formal charge an atom must carry (when its charge is set at all)
    /// to be assigned this type.
    pub formal_charge: i8,
    /// Total neighbor count (explicit plus implicit hydrogens) the
    /// type accounts for.
    pub formal_neighbor_count: u8,
    /// Number of π bonds in the bonding pattern (a triple bond counts
    /// as two).
    pub pi_bond_count: u8,
    /// Highest bond order the pattern contains, `None` for unbonded
    /// species.
    pub max_bond_order: Option<BondOrder>,
    /// Hybridization implied by the pattern, if meaningful.
    pub hybridization: Option<Hybridization>,
}

impl AtomTypeDefinition {
    /// Maximum bond-order sum the type supports: σ framework plus π
    /// contributions.
    pub fn valency(&self) -> u8 {
        self.pi_bond_count + self.formal_neighbor_count
    }
}

/// Lookup failure: a type identifier not present in the catalog.
///
/// Decision procedures only reference identifiers their catalog is
/// expected to carry, so hitting this with the built-in catalog means
/// a mismatched or truncated custom catalog, not a property of the
/// molecule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAtomType {
    pub identifier: String,
}

impl fmt::Display for UnknownAtomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "atom type {:?} is not in the catalog", self.identifier)
    }
}

impl std::error::Error for UnknownAtomType {}

/// A read-only dictionary of atom types, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct AtomTypeCatalog {
    types: HashMap<String, AtomTypeDefinition>,
}

impl AtomTypeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog backing the built-in decision procedures.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for &(identifier, atomic_num, charge, neighbors, pi, max, hyb) in BUILTIN {
            catalog.insert(AtomTypeDefinition {
                identifier: identifier.to_owned(),
                atomic_num,
                formal_charge: charge,
                formal_neighbor_count: neighbors,
                pi_bond_count: pi,
                max_bond_order: max,
                hybridization: hyb,
            });
        }
        catalog
    }

    pub fn insert(&mut self, def: AtomTypeDefinition) {
        self.types.insert(def.identifier.clone(), def);
    }

    pub fn lookup(&self, identifier: &str) -> Result<&AtomTypeDefinition, UnknownAtomType> {
        self.types.get(identifier).ok_or_else(|| UnknownAtomType {
            identifier: identifier.to_owned(),
        })
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.types.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AtomTypeDefinition> {
        self.types.values()
    }
}

type Row = (
    &'static str,
    u8,
    i8,
    u8,
    u8,
    Option<BondOrder>,
    Option<Hybridization>,
);

const S: Option<BondOrder> = Some(BondOrder::Single);
const D: Option<BondOrder> = Some(BondOrder::Double);
const T: Option<BondOrder> = Some(BondOrder::Triple);
const SP1: Option<Hybridization> = Some(Hybridization::SP1);
const SP2: Option<Hybridization> = Some(Hybridization::SP2);
const SP3: Option<Hybridization> = Some(Hybridization::SP3);
const PL3: Option<Hybridization> = Some(Hybridization::PLANAR3);

// identifier, element, charge, neighbors, pi bonds, max order, hybridization
#[rustfmt::skip]
const BUILTIN: &[Row] = &[
    // pseudo-atom wildcard
    ("X",                      0,  0, 0, 0, None, None),
    // hydrogen
    ("H",                      1,  0, 1, 0, S,    None),
    ("H.plus",                 1,  1, 0, 0, None, None),
    ("H.minus",                1, -1, 0, 0, None, None),
    ("H.radical",              1,  0, 0, 0, None, None),
    // carbon
    ("C.sp3",                  6,  0, 4, 0, S,    SP3),
    ("C.sp2",                  6,  0, 3, 1, D,    SP2),
    ("C.sp",                   6,  0, 2, 2, T,    SP1),
    ("C.allene",               6,  0, 2, 2, D,    SP1),
    ("C.plus.sp1",             6,  1, 1, 2, T,    SP1),
    ("C.plus.sp2",             6,  1, 2, 1, D,    SP2),
    ("C.plus.planar",          6,  1, 3, 0, S,    PL3),
    ("C.minus.sp1",            6, -1, 1, 2, T,    SP1),
    ("C.minus.sp2",            6, -1, 2, 1, D,    SP2),
    ("C.minus.sp3",            6, -1, 3, 0, S,    SP3),
    ("C.minus.planar",         6, -1, 3, 0, S,    PL3),
    ("C.radical.planar",       6,  0, 3, 0, S,    PL3),
    ("C.radical.sp2",          6,  0, 2, 1, D,    SP2),
    ("C.radical.sp1",          6,  0, 1, 2, T,    SP1),
    // nitrogen
    ("N.sp3",                  7,  0, 3, 0, S,    SP3),
    ("N.sp2",                  7,  0, 2, 1, D,    SP2),
    ("N.sp1",                  7,  0, 1, 2, T,    SP1),
    ("N.sp1.2",                7,  0, 2, 2, T,    SP1),
    ("N.sp2.3",                7,  0, 3, 1, D,    SP2),
    ("N.planar3",              7,  0, 3, 0, S,    PL3),
    ("N.amide",                7,  0, 3, 0, S,    PL3),
    ("N.thioamide",            7,  0, 3, 0, S,    PL3),
    ("N.nitro",                7,  0, 3, 2, D,    SP2),
    ("N.oxide",                7,  0, 4, 1, D,    SP3),
    ("N.plus",                 7,  1, 4, 0, S,    SP3),
    ("N.plus.sp2",             7,  1, 3, 1, D,    SP2),
    ("N.plus.sp1",             7,  1, 2, 2, T,    SP1),
    ("N.minus.sp3",            7, -1, 2, 0, S,    SP3),
    ("N.minus.sp2",            7, -1, 1, 1, D,    SP2),
    ("N.minus.planar3",        7, -1, 2, 0, S,    PL3),
    ("N.sp3.radical",          7,  0, 2, 0, S,    SP3),
    ("N.sp2.radical",          7,  0, 1, 1, D,    SP2),
    ("N.plus.sp3.radical",     7,  1, 3, 0, S,    SP3),
    ("N.plus.sp2.radical",     7,  1, 2, 1, D,    SP2),
    // oxygen
    ("O.sp3",                  8,  0, 2, 0, S,    SP3),
    ("O.sp2",                  8,  0, 1, 1, D,    SP2),
    ("O.sp2.co2",              8,  0, 1, 1, D,    SP2),
    ("O.planar3",              8,  0, 2, 0, S,    PL3),
    ("O.minus",                8, -1, 1, 0, S,    SP3),
    ("O.minus.co2",            8, -1, 1, 0, S,    SP3),
    ("O.minus2",               8, -2, 0, 0, None, SP3),
    ("O.plus",                 8,  1, 3, 0, S,    SP3),
    ("O.plus.sp2",             8,  1, 2, 1, D,    SP2),
    ("O.plus.sp1",             8,  1, 1, 2, T,    SP1),
    ("O.sp3.radical",          8,  0, 1, 0, S,    SP3),
    ("O.plus.radical",         8,  1, 2, 0, S,    SP3),
    ("O.plus.sp2.radical",     8,  1, 1, 1, D,    SP2),
    // sulfur
    ("S.3",                   16,  0, 2, 0, S,    SP3),
    ("S.2",                   16,  0, 1, 1, D,    SP2),
    ("S.planar3",             16,  0, 2, 0, S,    PL3),
    ("S.oxide",               16,  0, 2, 2, D,    SP2),
    ("S.inyl",                16,  0, 3, 1, D,    SP3),
    ("S.inyl.2",              16,  0, 2, 2, D,    SP2),
    ("S.inyl.charged",        16,  1, 3, 0, S,    SP3),
    ("S.plus",                16,  1, 3, 0, S,    SP3),
    ("S.onyl",                16,  0, 4, 2, D,    SP3),
    ("S.onyl.charged",        16,  2, 4, 0, S,    SP3),
    ("S.thionyl",             16,  0, 4, 2, D,    SP3),
    ("S.trioxide",            16,  0, 3, 3, D,    SP2),
    ("S.anyl",                16,  0, 4, 0, S,    SP3),
    ("S.sp3.4",               16,  0, 4, 2, D,    SP3),
    ("S.sp3d1",               16,  0, 5, 1, D,    None),
    ("S.octahedral",          16,  0, 6, 0, S,    None),
    ("S.minus",               16, -1, 1, 0, S,    SP3),
    ("S.2minus",              16, -2, 0, 0, None, SP3),
    // phosphorus
    ("P.ine",                 15,  0, 3, 0, S,    SP3),
    ("P.ide",                 15,  0, 1, 0, S,    SP3),
    ("P.ate",                 15,  0, 4, 1, D,    SP3),
    ("P.ate.charged",         15,  1, 4, 0, S,    SP3),
    ("P.anium",               15,  1, 4, 0, S,    SP3),
    ("P.irane",               15,  0, 2, 1, D,    SP2),
    ("P.sp1.plus",            15,  1, 2, 2, D,    SP1),
    ("P.ane",                 15,  0, 5, 0, S,    None),
    ("P.se.3",                15,  0, 0, 0, None, SP3),
    // halogens
    ("F",                      9,  0, 1, 0, S,    SP3),
    ("F.minus",                9, -1, 0, 0, None, SP3),
    ("F.plus.sp2",             9,  1, 1, 1, D,    SP2),
    ("F.plus.sp3",             9,  1, 2, 0, S,    SP3),
    ("F.radical",              9,  0, 0, 0, None, SP3),
    ("F.plus.radical",         9,  1, 1, 0, S,    SP3),
    ("Cl",                    17,  0, 1, 0, S,    SP3),
    ("Cl.minus",              17, -1, 0, 0, None, SP3),
    ("Cl.plus.sp2",           17,  1, 1, 1, D,    SP2),
    ("Cl.plus.sp3",           17,  1, 2, 0, S,    SP3),
    ("Cl.radical",            17,  0, 0, 0, None, SP3),
    ("Cl.plus.radical",       17,  1, 1, 0, S,    SP3),
    ("Cl.2",                  17,  0, 2, 1, D,    None),
    ("Cl.chlorate",           17,  0, 3, 2, D,    None),
    ("Cl.perchlorate",        17,  0, 4, 3, D,    None),
    ("Cl.perchlorate.charged", 17, 3, 4, 0, S,    None),
    ("Br",                    35,  0, 1, 0, S,    SP3),
    ("Br.minus",              35, -1, 0, 0, None, SP3),
    ("Br.plus.sp2",           35,  1, 1, 1, D,    SP2),
    ("Br.plus.sp3",           35,  1, 2, 0, S,    SP3),
    ("Br.radical",            35,  0, 0, 0, None, SP3),
    ("Br.plus.radical",       35,  1, 1, 0, S,    SP3),
    ("Br.3",                  35,  0, 3, 0, S,    None),
    ("I",                     53,  0, 1, 0, S,    SP3),
    ("I.minus",               53, -1, 0, 0, None, SP3),
    ("I.minus.5",             53, -1, 2, 0, S,    None),
    ("I.plus.sp2",            53,  1, 1, 1, D,    SP2),
    ("I.plus.sp3",            53,  1, 2, 0, S,    SP3),
    ("I.radical",             53,  0, 0, 0, None, SP3),
    ("I.plus.radical",        53,  1, 1, 0, S,    SP3),
    ("I.3",                   53,  0, 2, 1, D,    None),
    ("I.5",                   53,  0, 3, 2, D,    None),
    ("I.sp3d2.3",             53,  0, 3, 0, S,    None),
    // noble gases
    ("He",                     2,  0, 0, 0, None, None),
    ("Ne",                    10,  0, 0, 0, None, None),
    ("Ar",                    18,  0, 0, 0, None, None),
    ("Kr",                    36,  0, 0, 0, None, None),
    ("Xe",                    54,  0, 0, 0, None, None),
    ("Xe.3",                  54,  0, 2, 0, S,    None),
    ("Rn",                    86,  0, 0, 0, None, None),
    // group 1 and 2
    ("Li",                     3,  0, 1, 0, S,    None),
    ("Li.neutral",             3,  0, 0, 0, None, None),
    ("Li.plus",                3,  1, 0, 0, None, None),
    ("Na",                    11,  0, 1, 0, S,    None),
    ("Na.neutral",            11,  0, 0, 0, None, None),
    ("Na.plus",               11,  1, 0, 0, None, None),
    ("K.neutral",             19,  0, 1, 0, S,    None),
    ("K.metallic",            19,  0, 0, 0, None, None),
    ("K.plus",                19,  1, 0, 0, None, None),
    ("Rb.neutral",            37,  0, 0, 0, None, None),
    ("Rb.plus",               37,  1, 0, 0, None, None),
    ("Be.neutral",             4,  0, 0, 0, None, None),
    ("Be.2minus",              4, -2, 4, 0, S,    SP3),
    ("Mg.neutral",            12,  0, 4, 0, S,    None),
    ("Mg.neutral.1",          12,  0, 1, 0, S,    None),
    ("Mg.neutral.2",          12,  0, 2, 0, S,    None),
    ("Mg.2plus",              12,  2, 0, 0, None, None),
    ("Ca.1",                  20,  0, 1, 0, S,    None),
    ("Ca.2",                  20,  0, 2, 0, S,    None),
    ("Ca.2plus",              20,  2, 0, 0, None, None),
    ("Sr.2plus",              38,  2, 0, 0, None, None),
    ("Ba.2plus",              56,  2, 0, 0, None, None),
    ("Ra.neutral",            88,  0, 0, 0, None, None),
    // boron group and heavier main group
    ("B",                      5,  0, 3, 0, S,    SP2),
    ("B.minus",                5, -1, 4, 0, S,    SP3),
    ("B.3plus",                5,  3, 4, 0, S,    None),
    ("Al",                    13,  0, 3, 0, S,    None),
    ("Al.3plus",              13,  3, 0, 0, None, None),
    ("Al.3minus",             13, -3, 6, 0, S,    None),
    ("Ga",                    31,  0, 3, 0, S,    None),
    ("Ga.3plus",              31,  3, 0, 0, None, None),
    ("In",                    49,  0, 0, 0, None, None),
    ("In.1",                  49,  0, 1, 0, S,    None),
    ("In.3",                  49,  0, 3, 0, S,    None),
    ("In.3plus",              49,  3, 0, 0, None, None),
    ("Tl",                    81,  0, 0, 0, None, None),
    ("Tl.1",                  81,  0, 1, 0, S,    None),
    ("Tl.plus",               81,  1, 0, 0, None, None),
    ("Si.sp3",                14,  0, 4, 0, S,    SP3),
    ("Si.2",                  14,  0, 2, 0, S,    None),
    ("Si.3",                  14,  0, 3, 0, S,    None),
    ("Si.2minus.6",           14, -2, 6, 0, S,    None),
    ("Ge",                    32,  0, 4, 0, S,    None),
    ("Ge.3",                  32,  0, 3, 1, D,    None),
    ("Sn.sp3",                50,  0, 4, 0, S,    SP3),
    ("Pb.neutral",            82,  0, 0, 0, None, None),
    ("Pb.1",                  82,  0, 1, 0, S,    None),
    ("Pb.2plus",              82,  2, 0, 0, None, None),
    // pnictogens beyond nitrogen
    ("As",                    33,  0, 3, 0, S,    SP3),
    ("As.2",                  33,  0, 2, 1, D,    None),
    ("As.5",                  33,  0, 4, 1, D,    None),
    ("As.plus",               33,  1, 4, 0, S,    None),
    ("As.minus",              33, -1, 2, 0, S,    None),
    ("As.3plus",              33,  3, 0, 0, None, None),
    ("Sb.3",                  51,  0, 3, 0, S,    SP3),
    ("Sb.4",                  51,  0, 4, 1, D,    None),
    // chalcogens beyond sulfur
    ("Se.1",                  34,  0, 1, 1, D,    SP2),
    ("Se.2",                  34,  0, 0, 0, None, None),
    ("Se.3",                  34,  0, 2, 0, S,    SP3),
    ("Se.sp2.2",              34,  0, 2, 2, D,    SP2),
    ("Se.sp3.3",              34,  0, 3, 1, D,    SP3),
    ("Se.sp3.4",              34,  0, 4, 2, D,    SP3),
    ("Se.sp3d1.4",            34,  0, 4, 0, S,    None),
    ("Se.5",                  34,  0, 5, 1, D,    None),
    ("Se.plus.3",             34,  1, 3, 0, S,    SP3),
    ("Se.4plus",              34,  4, 0, 0, None, None),
    ("Se.2minus",             34, -2, 0, 0, None, None),
    ("Te.3",                  52,  0, 2, 0, S,    SP3),
    ("Te.4plus",              52,  4, 0, 0, None, None),
    ("Po",                    84,  0, 2, 0, S,    None),
    // transition and heavy metals
    ("Sc.3minus",             21, -3, 6, 0, S,    None),
    ("Ti.sp3",                22,  0, 4, 0, S,    SP3),
    ("Ti.2",                  22,  0, 2, 0, S,    None),
    ("Ti.3minus",             22, -3, 6, 0, S,    None),
    ("V.3minus",              23, -3, 6, 0, S,    None),
    ("V.3minus.4",            23, -3, 4, 0, S,    None),
    ("Cr",                    24,  0, 6, 0, S,    None),
    ("Cr.4",                  24,  0, 4, 2, D,    None),
    ("Cr.neutral",            24,  0, 0, 0, None, None),
    ("Cr.3plus",              24,  3, 0, 0, None, None),
    ("Cr.6plus",              24,  6, 0, 0, None, None),
    ("Mn.2",                  25,  0, 2, 0, S,    None),
    ("Mn.metallic",           25,  0, 0, 0, None, None),
    ("Mn.2plus",              25,  2, 0, 0, None, None),
    ("Mn.3plus",              25,  3, 0, 0, None, None),
    ("Fe.metallic",           26,  0, 0, 0, None, None),
    ("Fe.2",                  26,  0, 2, 0, S,    None),
    ("Fe.3",                  26,  0, 3, 0, S,    None),
    ("Fe.4",                  26,  0, 4, 0, S,    None),
    ("Fe.5",                  26,  0, 5, 0, S,    None),
    ("Fe.6",                  26,  0, 6, 0, S,    None),
    ("Fe.plus",               26,  1, 2, 0, S,    None),
    ("Fe.2plus",              26,  2, 0, 0, None, None),
    ("Fe.3plus",              26,  3, 0, 0, None, None),
    ("Fe.2minus",             26, -2, 0, 0, None, None),
    ("Fe.3minus",             26, -3, 0, 0, None, None),
    ("Fe.4minus",             26, -4, 0, 0, None, None),
    ("Co.metallic",           27,  0, 0, 0, None, None),
    ("Co.1",                  27,  0, 1, 0, S,    None),
    ("Co.2",                  27,  0, 2, 0, S,    None),
    ("Co.4",                  27,  0, 4, 0, S,    None),
    ("Co.6",                  27,  0, 6, 0, S,    None),
    ("Co.2plus",              27,  2, 0, 0, None, None),
    ("Co.3plus",              27,  3, 0, 0, None, None),
    ("Co.plus",               27,  1, 0, 0, None, None),
    ("Co.plus.1",             27,  1, 1, 0, S,    None),
    ("Co.plus.2",             27,  1, 2, 0, S,    None),
    ("Co.plus.4",             27,  1, 4, 0, S,    None),
    ("Co.plus.5",             27,  1, 5, 0, S,    None),
    ("Co.plus.6",             27,  1, 6, 0, S,    None),
    ("Ni",                    28,  0, 2, 0, S,    None),
    ("Ni.metallic",           28,  0, 0, 0, None, None),
    ("Ni.plus",               28,  1, 1, 0, S,    None),
    ("Ni.2plus",              28,  2, 0, 0, None, None),
    ("Cu.metallic",           29,  0, 0, 0, None, None),
    ("Cu.1",                  29,  0, 1, 0, S,    None),
    ("Cu.plus",               29,  1, 0, 0, None, None),
    ("Cu.2plus",              29,  2, 0, 0, None, None),
    ("Zn.metallic",           30,  0, 0, 0, None, None),
    ("Zn.1",                  30,  0, 1, 0, S,    None),
    ("Zn",                    30,  0, 2, 0, S,    None),
    ("Zn.2plus",              30,  2, 0, 0, None, None),
    ("Mo.4",                  42,  0, 4, 0, S,    None),
    ("Mo.metallic",           42,  0, 0, 0, None, None),
    ("Ru.6",                  44,  0, 6, 0, S,    None),
    ("Ru.2minus.6",           44, -2, 6, 0, S,    None),
    ("Ru.3minus.6",           44, -3, 6, 0, S,    None),
    ("Ag.neutral",            47,  0, 0, 0, None, None),
    ("Ag.1",                  47,  0, 1, 0, S,    None),
    ("Ag.plus",               47,  1, 0, 0, None, None),
    ("Cd.metallic",           48,  0, 0, 0, None, None),
    ("Cd.2",                  48,  0, 2, 0, S,    None),
    ("Cd.2plus",              48,  2, 0, 0, None, None),
    ("W.metallic",            74,  0, 0, 0, None, None),
    ("Pt.2",                  78,  0, 2, 0, S,    None),
    ("Pt.4",                  78,  0, 4, 0, S,    None),
    ("Pt.6",                  78,  0, 6, 0, S,    None),
    ("Pt.2plus",              78,  2, 0, 0, None, None),
    ("Pt.2plus.4",            78,  2, 4, 0, S,    None),
    ("Au.1",                  79,  0, 1, 0, S,    None),
    ("Hg.metallic",           80,  0, 0, 0, None, None),
    ("Hg.1",                  80,  0, 1, 0, S,    None),
    ("Hg.2",                  80,  0, 2, 0, S,    None),
    ("Hg.plus",               80,  1, 1, 0, S,    None),
    ("Hg.2plus",              80,  2, 0, 0, None, None),
    ("Hg.minus",              80, -1, 2, 0, S,    None),
    ("Gd.3plus",              64,  3, 0, 0, None, None),
    ("Th",                    90,  0, 0, 0, None, None),
    ("Pu",                    94,  0, 0, 0, None, None),
];
