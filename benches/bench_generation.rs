use criterion::{black_box, criterion_group, criterion_main, Criterion};
use genalg_tsp::{
    city::CitySetup,
    evolution::{EvolutionOptions, PopulationEngine},
    rng::RandomNumberGenerator,
};

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_generation");
    for (cities, population) in [(20, 50), (100, 200), (250, 500)].iter() {
        let mut rng = RandomNumberGenerator::from_seed(42);
        let options = EvolutionOptions::builder()
            .population_size(*population)
            .build();
        let mut engine = PopulationEngine::new(options).unwrap();
        engine
            .setup_cities(&CitySetup::new(*cities, 800, 600), &mut rng)
            .unwrap();
        engine.initialize_population(&mut rng).unwrap();

        group.bench_function(format!("cities_{}_population_{}", cities, population), |b| {
            b.iter(|| black_box(engine.next_generation(black_box(&mut rng)).unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
