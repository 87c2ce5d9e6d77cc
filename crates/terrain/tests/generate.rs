use terrain::{generate, perlin, TerrainConfig};

#[test]
fn same_seed_same_terrain() {
    let config = TerrainConfig::default();
    let a = generate(&mut fastrand::Rng::with_seed(42), &config).unwrap();
    let b = generate(&mut fastrand::Rng::with_seed(42), &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let config = TerrainConfig::default();
    let a = generate(&mut fastrand::Rng::with_seed(1), &config).unwrap();
    let b = generate(&mut fastrand::Rng::with_seed(2), &config).unwrap();
    assert_ne!(a, b);
}

#[test]
fn shape_is_fixed_for_any_seed() {
    let config = TerrainConfig::default();
    for seed in [0, 7, 42, 1234, u64::MAX] {
        let map = generate(&mut fastrand::Rng::with_seed(seed), &config).unwrap();
        assert_eq!(map.shape(), (50, 1000));
        assert_eq!(map.as_slice().len(), 50_000);
    }
}

#[test]
fn octave_sum_is_bounded_by_harmonic_weights() {
    // |perlin| <= 1, so the sum is bounded by 1 + 1/2 + ... + 1/9
    let bound: f32 = (1..=9).map(|f| 1.0 / f as f32).sum();
    let map = generate(&mut fastrand::Rng::with_seed(5), &TerrainConfig::default()).unwrap();
    assert!(map.max() <= bound + 1e-3);
    assert!(map.min() >= -bound - 1e-3);
    assert!(map.max() > map.min());
}

#[test]
fn generate_matches_manual_octave_sum() {
    let config = TerrainConfig { rows: 6, cols: 30, octaves: 3 };
    let generated = generate(&mut fastrand::Rng::with_seed(9), &config).unwrap();

    let mut rng = fastrand::Rng::with_seed(9);
    let mut manual = terrain::HeightMap::zeros(6, 30).unwrap();
    for f in 1..=3 {
        let octave = perlin(&mut rng, (6, 30), f).unwrap();
        manual.add_scaled(&octave, 1.0 / f as f32).unwrap();
    }
    assert_eq!(generated, manual);
}

#[test]
fn empty_resolution_is_an_error() {
    let config = TerrainConfig { rows: 0, cols: 1000, octaves: 9 };
    assert!(generate(&mut fastrand::Rng::with_seed(0), &config).is_err());
}
