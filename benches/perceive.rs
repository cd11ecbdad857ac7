use criterion::{criterion_group, criterion_main, Criterion};

use atomtyper::{Atom, AtomTypeCatalog, AtomTyper, Bond, BondOrder, Element, Mol, PerceptionMode};

fn with_h(element: Element, hydrogens: u8) -> Atom {
    Atom {
        implicit_hydrogen_count: Some(hydrogens),
        ..Atom::from_element(element)
    }
}

fn double() -> Bond {
    Bond {
        order: Some(BondOrder::Double),
        ..Bond::default()
    }
}

/// A peptide-flavored test molecule: `n` glycine-like repeats
/// (N-C-C(=O)) capped with a phenyl ring, mixing amide nitrogens,
/// carbonyl oxygens and aromatic carbons.
fn polyglycine(n: usize) -> Mol<Atom, Bond> {
    let mut mol = Mol::new();
    let mut prev = None;
    for _ in 0..n {
        let nitrogen = mol.add_atom(with_h(Element::N, 1));
        let alpha = mol.add_atom(with_h(Element::C, 2));
        let carbonyl = mol.add_atom(with_h(Element::C, 0));
        let oxygen = mol.add_atom(with_h(Element::O, 0));
        mol.add_bond(nitrogen, alpha, Bond::default());
        mol.add_bond(alpha, carbonyl, Bond::default());
        mol.add_bond(carbonyl, oxygen, double());
        if let Some(prev_carbonyl) = prev {
            mol.add_bond(prev_carbonyl, nitrogen, Bond::default());
        }
        prev = Some(carbonyl);
    }
    let ring: Vec<_> = (0..6)
        .map(|i| mol.add_atom(with_h(Element::C, if i == 0 { 0 } else { 1 })))
        .collect();
    for i in 0..6 {
        let bond = if i % 2 == 0 { double() } else { Bond::default() };
        mol.add_bond(ring[i], ring[(i + 1) % 6], bond);
    }
    mol.add_bond(ring[0], prev.unwrap(), Bond::default());
    mol
}

fn bench_perceive_all(c: &mut Criterion) {
    let catalog = AtomTypeCatalog::builtin();
    let mol = polyglycine(25);

    c.bench_function("perceive_all polyglycine-25", |b| {
        b.iter(|| {
            let typer = AtomTyper::new(&mol, &catalog, PerceptionMode::RequireNothing);
            typer.perceive_all().unwrap().len()
        })
    });

    c.bench_function("catalog build", |b| {
        b.iter(AtomTypeCatalog::builtin)
    });
}

criterion_group!(benches, bench_perceive_all);
criterion_main!(benches);
